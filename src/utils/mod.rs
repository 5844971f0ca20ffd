pub mod formatting;

pub use formatting::{format_signed, round_cents};
