pub mod assembler;
pub mod formatter;
pub mod loader;
pub mod performance;
pub mod cost;

pub use assembler::{generate_cost_report, generate_markdown_report, generate_performance_report};
pub use formatter::format_security_report;
pub use loader::{load_security_report, read_security_report};
