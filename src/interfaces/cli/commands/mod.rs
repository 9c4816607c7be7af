//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod account;
mod config_gen;
mod prompt;
mod session;
mod shorten;

pub use account::*;
pub use config_gen::*;
pub use session::*;
pub use shorten::*;
