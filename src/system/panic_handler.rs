//! Panic handler module
//!
//! Every mode writes a report to `crash.log`. TUI mode restores the terminal
//! first so the message is readable.

use std::fs::OpenOptions;
use std::io::Write;
use std::panic;

use chrono::Utc;

/// Running mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Cli,
    Tui,
}

const CRASH_LOG: &str = "crash.log";

/// Install custom panic hook
pub fn install_panic_hook(mode: RunMode) {
    panic::set_hook(Box::new(move |panic_info| {
        #[cfg(feature = "tui")]
        if mode == RunMode::Tui {
            ratatui::restore();
        }

        let payload = panic_info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        let backtrace = std::backtrace::Backtrace::force_capture();
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

        if let Err(e) = write_crash_log(&timestamp, &message, &location, &backtrace) {
            eprintln!("Failed to write crash log: {}", e);
        }

        display_panic(mode, &message, &location);
    }));
}

fn display_panic(mode: RunMode, message: &str, location: &str) {
    use colored::Colorize;

    eprintln!();
    eprintln!("{} {}", "Scissors crashed:".red().bold(), message.white());
    if mode == RunMode::Cli {
        eprintln!("{} {}", "Location:".yellow().bold(), location);
    }
    eprintln!("{}", format!("Details saved to {}", CRASH_LOG).cyan());
    eprintln!();
}

fn write_crash_log(
    timestamp: &str,
    message: &str,
    location: &str,
    backtrace: &std::backtrace::Backtrace,
) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(CRASH_LOG)?;

    writeln!(file, "==========================================")?;
    writeln!(file, "Crash Report - {}", timestamp)?;
    writeln!(file, "==========================================")?;
    writeln!(file, "Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(file, "Message: {}", message)?;
    writeln!(file, "Location: {}", location)?;
    writeln!(file, "\nBacktrace:")?;
    writeln!(file, "{:?}", backtrace)?;
    writeln!(file, "==========================================\n")?;

    Ok(())
}
