use chat_bench::args::common::ChatBenchArgs;
use chat_bench::benchmark_runner::BenchmarkRunner;
use chat_bench::utils::logging::init_logging;
use clap::Parser;
use figlet_rs::FIGfont;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let args = ChatBenchArgs::parse();
    init_logging();
    args.validate();

    if let Ok(font) = FIGfont::standard() {
        if let Some(figure) = font.convert("Chat Bench") {
            println!("{figure}");
        }
    }

    let mut benchmark_runner = BenchmarkRunner::new(args);

    info!("Starting the benchmark...");
    match benchmark_runner.run().await {
        Ok(_) => {
            info!("Finished the benchmark.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
