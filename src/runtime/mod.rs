//! Application lifecycle and execution modes
//!
//! - `lifetime`: building the shared services from configuration
//! - `modes`: CLI and TUI entry points

pub mod lifetime;
pub mod modes;
