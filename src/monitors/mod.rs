//! Simulated endpoint checks and cloud costs behind the performance and cost reports.

pub mod performance;
pub mod cost;

pub use performance::{simulate_api_calls, EndpointCheck};
pub use cost::{simulate_cloud_costs, CostAnalysis};
