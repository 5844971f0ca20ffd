pub mod cli;
pub mod collector;
pub mod config;
pub mod errors;
pub mod models;
pub mod monitors;
pub mod reporting;
pub mod utils;
