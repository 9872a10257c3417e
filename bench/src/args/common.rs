use super::defaults::*;
use super::examples::EXAMPLES;
use super::kind::TestType;
use chat_bench_report::benchmark_kind::BenchmarkKind;
use chat_bench_report::params::BenchmarkParams;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Chat server benchmarking tool", long_about = None, after_long_help = EXAMPLES)]
pub struct ChatBenchArgs {
    /// Chat server host
    #[arg(long, default_value_t = DEFAULT_HOST.to_owned())]
    pub host: String,

    /// Chat server port
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Number of concurrent connections (burst mode)
    #[arg(long, short = 'c', default_value_t = DEFAULT_CONNECTIONS)]
    pub connections: NonZeroU32,

    /// Commands sent per connection (burst mode)
    #[arg(long, short = 'm', default_value_t = DEFAULT_MESSAGES_PER_CONNECTION)]
    pub messages: u32,

    /// Delay between commands in seconds, fractions allowed (burst mode)
    #[arg(long, short = 'd', default_value_t = DEFAULT_MESSAGE_DELAY_SECS, value_parser = parse_delay)]
    pub delay: f64,

    /// Test type
    #[arg(long, short = 't', value_enum, default_value_t = TestType::Concurrent)]
    pub test_type: TestType,

    /// Duration of the sustained test in seconds
    #[arg(long, default_value_t = DEFAULT_SUSTAINED_DURATION_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub duration: u64,

    /// Connections launched per batch in the sustained test
    #[arg(long, short = 'r', default_value_t = DEFAULT_SUSTAINED_RATE)]
    pub rate: NonZeroU32,

    /// Timeout in seconds applied to every connect, send and receive
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Read and discard the welcome line sent by the server after connecting
    #[arg(long, default_value_t = DEFAULT_CONSUME_WELCOME)]
    pub consume_welcome: bool,

    /// Save results to a JSON file
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

fn parse_delay(value: &str) -> Result<f64, String> {
    let delay: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number of seconds"))?;
    Duration::try_from_secs_f64(delay)
        .map_err(|e| format!("'{value}' is not a valid delay: {e}"))?;
    Ok(delay)
}

impl ChatBenchArgs {
    pub fn validate(&self) {
        if self.output.as_ref().is_some_and(|p| p.is_dir()) {
            ChatBenchArgs::command()
                .error(
                    ErrorKind::InvalidValue,
                    "--output must be a file path, not a directory",
                )
                .exit();
        }
    }

    pub fn kind(&self) -> BenchmarkKind {
        self.test_type.as_simple_kind()
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn message_delay(&self) -> Duration {
        Duration::from_secs_f64(self.delay)
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn sustained_duration(&self) -> Duration {
        Duration::from_secs(self.duration)
    }

    pub fn params(&self) -> BenchmarkParams {
        BenchmarkParams {
            benchmark_kind: self.kind(),
            server_address: self.server_address(),
            connections: self.connections.get(),
            messages_per_connection: self.messages,
            delay_secs: self.delay,
            duration_secs: self.duration,
            rate: self.rate.get(),
            timeout_secs: self.timeout,
            consume_welcome: self.consume_welcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::benchmark::Benchmarkable;
    use crate::error::ChatBenchError;

    #[test]
    fn defaults_match_original_tool() {
        let args = ChatBenchArgs::parse_from(["chat-bench"]);
        assert_eq!(args.server_address(), "localhost:8081");
        assert_eq!(args.connections.get(), 100);
        assert_eq!(args.messages, 10);
        assert_eq!(args.message_delay(), Duration::from_millis(100));
        assert_eq!(args.kind(), BenchmarkKind::Concurrent);
        assert_eq!(args.sustained_duration(), Duration::from_secs(60));
        assert_eq!(args.rate.get(), 10);
        assert_eq!(args.operation_timeout(), Duration::from_secs(5));
        assert!(!args.consume_welcome);
        assert!(args.output.is_none());
    }

    #[test]
    fn sustained_flags_are_parsed() {
        let args = ChatBenchArgs::parse_from([
            "chat-bench",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--test-type",
            "sustained",
            "--duration",
            "2",
            "--rate",
            "5",
            "--output",
            "out.json",
        ]);
        let params = args.params();
        assert_eq!(params.benchmark_kind, BenchmarkKind::Sustained);
        assert_eq!(params.server_address, "127.0.0.1:9000");
        assert_eq!(params.duration_secs, 2);
        assert_eq!(params.rate, 5);
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(ChatBenchArgs::try_parse_from(["chat-bench", "--delay", "-1"]).is_err());
        assert!(ChatBenchArgs::try_parse_from(["chat-bench", "--connections", "0"]).is_err());
        assert!(ChatBenchArgs::try_parse_from(["chat-bench", "--rate", "0"]).is_err());
        assert!(ChatBenchArgs::try_parse_from(["chat-bench", "--timeout", "0"]).is_err());
        assert!(ChatBenchArgs::try_parse_from(["chat-bench", "--test-type", "ramp"]).is_err());
    }

    #[test]
    fn delay_must_fit_in_a_duration() {
        for delay in ["1e20", "inf", "NaN"] {
            assert!(
                ChatBenchArgs::try_parse_from(["chat-bench", "--delay", delay]).is_err(),
                "delay {delay} should be rejected"
            );
        }
        let args = ChatBenchArgs::try_parse_from(["chat-bench", "--delay", "0"]).unwrap();
        assert_eq!(args.message_delay(), Duration::ZERO);
        let args = ChatBenchArgs::try_parse_from(["chat-bench", "--delay", "2.5"]).unwrap();
        assert_eq!(args.message_delay(), Duration::from_millis(2500));
    }

    #[test]
    fn sustained_duration_must_be_non_zero() {
        assert!(ChatBenchArgs::try_parse_from(["chat-bench", "--duration", "0"]).is_err());
        let args = ChatBenchArgs::try_parse_from(["chat-bench", "--duration", "1"]).unwrap();
        assert_eq!(args.sustained_duration(), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn unrepresentable_sustained_duration_fails_without_panicking() {
        let args = ChatBenchArgs::try_parse_from([
            "chat-bench",
            "--test-type",
            "sustained",
            "--duration",
            "18446744073709551615",
        ])
        .unwrap();
        let mut benchmark: Box<dyn Benchmarkable> = (&args).into();
        let error = benchmark.run().await.unwrap_err();
        assert!(matches!(error, ChatBenchError::InvalidArgument(_)));
    }
}
