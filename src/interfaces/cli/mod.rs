//! CLI interface module
//!
//! This module provides command-line interface functionality for scissors.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::errors::ScissorsError;
use crate::runtime::lifetime::StartupContext;
use crate::services::AuthError;
use commands::{config_generate, login, register, reset_password, run_session, shorten};

#[derive(Debug)]
pub enum CliError {
    ServiceError(String),
    AuthError(String),
    InputError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ServiceError(msg) => format!("Service error: {}", msg),
            CliError::AuthError(msg) => format!("Authentication error: {}", msg),
            CliError::InputError(msg) => format!("Input error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ServiceError(msg) => {
                format!("{} {}", "Service error:".red().bold(), msg.white())
            }
            CliError::AuthError(msg) => {
                format!("{} {}", "Authentication error:".red().bold(), msg.white())
            }
            CliError::InputError(msg) => {
                format!("{} {}", "Input error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<ScissorsError> for CliError {
    fn from(err: ScissorsError) -> Self {
        match err {
            ScissorsError::Validation(msg) => CliError::InputError(msg),
            ScissorsError::Auth(msg) => CliError::AuthError(msg),
            other => CliError::ServiceError(other.message().to_string()),
        }
    }
}

impl From<AuthError> for CliError {
    fn from(err: AuthError) -> Self {
        CliError::AuthError(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::CommandError(err.to_string())
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(context: &StartupContext, cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Shorten { url, copy, no_qr } => {
            let show_qr = !no_qr && crate::config::get_config().ui.show_qr;
            shorten(context, &url, copy, show_qr).await
        }
        Commands::Session => run_session(context).await,
        Commands::Login { email } => login(&context.auth, email).await,
        Commands::Register { email, name } => register(&context.auth, email, name).await,
        Commands::ResetPassword { email } => reset_password(&context.auth, email).await,
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force),
        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "TUI mode is started without a command".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        assert!(matches!(
            CliError::from(ScissorsError::validation("bad")),
            CliError::InputError(msg) if msg == "bad"
        ));
        assert!(matches!(
            CliError::from(ScissorsError::create_failed("boom")),
            CliError::ServiceError(msg) if msg == "boom"
        ));
        assert!(matches!(
            CliError::from(AuthError::InvalidCredentials),
            CliError::AuthError(_)
        ));
    }

    #[test]
    fn test_format_simple() {
        assert_eq!(
            CliError::InputError("x".to_string()).format_simple(),
            "Input error: x"
        );
    }
}
