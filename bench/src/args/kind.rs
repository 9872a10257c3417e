use chat_bench_report::benchmark_kind::BenchmarkKind;
use clap::ValueEnum;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestType {
    /// All connections launched together, joined once
    #[default]
    Concurrent,
    /// Fixed-size batches of single-command connections over a duration
    Sustained,
}

impl TestType {
    pub fn as_simple_kind(&self) -> BenchmarkKind {
        match self {
            TestType::Concurrent => BenchmarkKind::Concurrent,
            TestType::Sustained => BenchmarkKind::Sustained,
        }
    }
}
