//! TUI mode
//!
//! Delegates to the actual TUI implementation.

use crate::runtime::lifetime::StartupContext;

/// Run TUI mode
pub async fn run_tui(context: StartupContext) -> Result<(), Box<dyn std::error::Error>> {
    crate::interfaces::tui::run_tui(context).await
}
