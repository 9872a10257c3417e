pub mod benchmark;
pub mod common;
pub mod concurrent_benchmark;
pub mod sustained_benchmark;
