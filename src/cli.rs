//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for scissors using clap's derive macros.

use clap::{Parser, Subcommand};

/// Scissors - shorten links from the terminal
#[derive(Parser, Debug)]
#[command(name = "scissors")]
#[command(version)]
#[command(about = "Shorten links, show them as QR codes and copy them", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start TUI mode (default when no command is given)
    #[cfg(feature = "tui")]
    Tui,

    /// Shorten a single URL and print the result
    Shorten {
        /// Long URL to shorten
        url: String,

        /// Copy the short URL to the clipboard
        #[arg(long)]
        copy: bool,

        /// Do not print the QR code
        #[arg(long)]
        no_qr: bool,
    },

    /// Interactive create / copy / remove loop on stdin
    Session,

    /// Sign in with email and password
    Login {
        /// Account email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
    },

    /// Create a new account
    Register {
        /// Account email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,

        /// Display name (prompted when omitted)
        #[arg(long)]
        name: Option<String>,
    },

    /// Send a password reset email
    ResetPassword {
        /// Account email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
