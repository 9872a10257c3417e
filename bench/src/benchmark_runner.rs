use crate::analytics::result_builder::BenchmarkResultBuilder;
use crate::args::common::ChatBenchArgs;
use crate::benchmarks::benchmark::Benchmarkable;
use crate::error::ChatBenchError;
use crate::utils::check_server_reachable;
use chat_bench_report::result::BenchmarkResult;
use tracing::{error, info};

pub struct BenchmarkRunner {
    pub args: Option<ChatBenchArgs>,
}

impl BenchmarkRunner {
    pub fn new(args: ChatBenchArgs) -> Self {
        Self { args: Some(args) }
    }

    /// Checks that the server is reachable, runs the load, prints the summary
    /// and saves the result when an output path was given.
    ///
    /// No worker is launched when the reachability check fails.
    pub async fn run(&mut self) -> Result<BenchmarkResult, ChatBenchError> {
        let args = self.args.take().ok_or_else(|| {
            ChatBenchError::InvalidArgument("benchmark runner can only be run once".to_owned())
        })?;

        let server_address = args.server_address();
        check_server_reachable(&server_address, args.operation_timeout()).await?;
        info!("Chat server reachable at {server_address}");

        let mut benchmark: Box<dyn Benchmarkable> = (&args).into();
        benchmark.print_info();
        let run = benchmark.run().await?;
        info!("{} benchmark finished", benchmark.kind());

        let result = BenchmarkResultBuilder::from_load_run(args.params(), run);
        result.print_summary();

        if let Some(output) = &args.output {
            result.dump_to_json(output).map_err(|e| {
                error!("Failed to save results to {}: {e}", output.display());
                ChatBenchError::CannotWriteResults(format!("{}: {e}", output.display()))
            })?;
            info!("Results saved to: {}", output.display());
        }

        Ok(result)
    }
}
