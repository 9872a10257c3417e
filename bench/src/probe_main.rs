use chat_bench::args::probe::ChatProbeArgs;
use chat_bench::probe::ConnectionProbe;
use chat_bench::utils::logging::init_logging;
use clap::Parser;
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let args = ChatProbeArgs::parse();
    init_logging();

    let probe = ConnectionProbe::new(
        args.server_address(),
        args.commands(),
        args.pause(),
        args.operation_timeout(),
        !args.no_welcome,
    );

    match probe.run().await {
        Ok(transcript) => {
            transcript.print();
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
