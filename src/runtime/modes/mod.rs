//! Mode routing
//!
//! - CLI mode (one-shot and interactive commands)
//! - TUI mode (Terminal UI, default)

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    Unknown,
}

/// Pick the mode for a parsed command
///
/// No command (or `tui`) starts the TUI when it is compiled in; every
/// other command runs in CLI mode.
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    match command {
        #[cfg(feature = "tui")]
        None | Some(Commands::Tui) => Mode::Tui,
        #[cfg(feature = "cli")]
        Some(_) => Mode::Cli,
        #[allow(unreachable_patterns)]
        _ => Mode::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "tui")]
    #[test]
    fn test_no_command_starts_tui() {
        assert_eq!(detect_mode(None), Mode::Tui);
        assert_eq!(detect_mode(Some(&Commands::Tui)), Mode::Tui);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_commands_run_in_cli_mode() {
        assert_eq!(detect_mode(Some(&Commands::Session)), Mode::Cli);
    }
}
