//! Utility modules for EU4 save metadata.

pub mod date;

pub use date::{format_date, DateParseError, GameDate};
