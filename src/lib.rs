//! Scissors - a terminal client for shortening links
//!
//! Turns a long URL into a TinyURL short link, renders it as a QR code,
//! copies it to the clipboard and manages an optional Firebase account.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//! - **tui**: Terminal user interface (default)
//!
//! # Architecture
//! - `session`: Short link lifecycle (Idle → Pending → Ready → ConfirmingDelete)
//! - `services`: Shortening and identity providers
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Startup wiring and execution modes
//! - `system`: Logging and panic handling

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod qr;
pub mod runtime;
pub mod services;
pub mod session;
pub mod system;
pub mod utils;
