pub mod command;
pub mod outcome;
pub mod worker;
