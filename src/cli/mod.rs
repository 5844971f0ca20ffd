pub mod commands;
pub mod collect;
pub mod report;
pub mod scan;
pub mod perf;
pub mod cost;

pub use commands::{Cli, Commands};
