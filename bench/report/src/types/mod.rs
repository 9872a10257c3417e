pub mod benchmark_kind;
pub mod error_summary;
pub mod params;
pub mod result;
pub mod statistics;
