//! CLI mode
//!
//! Delegates to the command implementations in `interfaces::cli`.

use crate::cli::Commands;
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::StartupContext;

/// Run CLI mode
pub async fn run_cli(context: StartupContext, command: Commands) -> Result<(), CliError> {
    crate::interfaces::cli::run_cli_command(&context, command).await
}
