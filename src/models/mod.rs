pub mod repository;
pub mod scan_result;
pub mod report;
pub mod loaded;

pub use repository::*;
pub use scan_result::*;
pub use report::*;
pub use loaded::Loaded;
