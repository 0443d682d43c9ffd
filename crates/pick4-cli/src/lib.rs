//! CLI library components for the Pick 4 toolkit.

pub mod input;
pub mod logging;
