//! Shorten command

use std::io::Write;
use std::sync::Arc;

use colored::Colorize;

use crate::clipboard::copy_to_clipboard;
use crate::errors::ScissorsError;
use crate::interfaces::cli::CliError;
use crate::qr::render_qr;
use crate::runtime::lifetime::StartupContext;
use crate::session::{CREATE_FAILED_MESSAGE, LinkLifecycleController};
use crate::utils::normalize_long_url;

/// Print a short link, optionally followed by its QR code
pub(super) fn print_short_link(
    out: &mut dyn Write,
    long_url: &str,
    short_url: &str,
    show_qr: bool,
) -> std::io::Result<()> {
    writeln!(
        out,
        "{} {} -> {}",
        "✓".bold().green(),
        long_url.dimmed(),
        short_url.cyan().bold().underline()
    )?;

    if show_qr {
        match render_qr(short_url) {
            Ok(qr) => writeln!(out, "{}", qr)?,
            Err(e) => writeln!(out, "{} {}", "⚠".yellow(), e.format_simple())?,
        }
    }
    Ok(())
}

pub async fn shorten(
    context: &StartupContext,
    url: &str,
    copy: bool,
    show_qr: bool,
) -> Result<(), CliError> {
    let long_url = normalize_long_url(url).map_err(ScissorsError::from)?;

    let mut controller = LinkLifecycleController::new(Arc::clone(&context.shortener));
    controller.submit(&long_url).await;

    let Some(short_url) = controller.session().short_url() else {
        let message = controller
            .session()
            .last_error()
            .unwrap_or(CREATE_FAILED_MESSAGE);
        return Err(CliError::ServiceError(message.to_string()));
    };

    let mut stdout = std::io::stdout();
    print_short_link(&mut stdout, &long_url, short_url, show_qr)?;

    if copy {
        copy_to_clipboard(short_url)?;
        println!("{} Copied!", "ℹ".bold().blue());
    }

    Ok(())
}
