use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
    Default,
    PartialOrd,
    Ord,
)]
pub enum BenchmarkKind {
    #[default]
    #[display("Concurrent")]
    #[serde(rename = "concurrent")]
    Concurrent,
    #[display("Sustained")]
    #[serde(rename = "sustained")]
    Sustained,
}
