pub mod common;
pub mod defaults;
pub mod examples;
pub mod kind;
pub mod probe;
