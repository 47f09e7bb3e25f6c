//! Integration tests for fitplan

mod config_loading;
mod plan_generation;
mod test_utils;

pub use test_utils::*;
