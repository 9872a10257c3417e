pub mod result_builder;
