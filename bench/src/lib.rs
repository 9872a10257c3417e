pub mod actors;
pub mod analytics;
pub mod args;
pub mod benchmark_runner;
pub mod benchmarks;
pub mod error;
pub mod probe;
pub mod utils;
