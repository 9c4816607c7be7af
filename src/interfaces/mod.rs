//! User-facing interfaces
//!
//! - `cli`: one-shot commands and the line-oriented session
//! - `tui`: the interactive landing page

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;
