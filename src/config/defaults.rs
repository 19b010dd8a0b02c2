//! Built-in configuration values.

pub const SOURCE: &str = "fafafa";
pub const TOAST_MILLIS: u64 = 300;
pub const TICK_MILLIS: u64 = 100;
