pub mod parser;
pub mod schema;
pub mod types;
pub mod credentials;
pub mod repositories;

pub use types::*;
pub use parser::{load_config, parse_config};
pub use repositories::{load_repositories, parse_repositories};
