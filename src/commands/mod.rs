//! Command implementations for the CLI
//!
//! - start: Start the optimizer server
//! - config: Configuration display and validation

pub mod config;
pub mod start;
