//! Interactive session command
//!
//! A line-based loop over one `LinkLifecycleController`:
//! Idle 时输入 URL；Ready 时可以复制 (c)、删除 (r) 或退出 (q)。

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use colored::Colorize;
use tracing::debug;

use super::shorten::print_short_link;
use crate::clipboard::{ClipboardSink, CopyIndicator, SystemClipboard};
use crate::config::get_config;
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::StartupContext;
use crate::session::{Confirmation, LineGate, LinkLifecycleController, SessionStatus};
use crate::utils::normalize_long_url;

/// Run the interactive session on stdin/stdout
pub async fn run_session(context: &StartupContext) -> Result<(), CliError> {
    let config = get_config();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut clipboard = SystemClipboard;

    run_session_with(
        context,
        &mut input,
        &mut output,
        &mut clipboard,
        config.ui.show_qr,
    )
    .await
}

/// Session loop over arbitrary input/output, used by [`run_session`] and tests
///
/// The removal confirmation is read from the same `input`, so the caller
/// may hold a locked stdin for the whole session.
pub async fn run_session_with(
    context: &StartupContext,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    clipboard: &mut dyn ClipboardSink,
    show_qr: bool,
) -> Result<(), CliError> {
    let mut controller = LinkLifecycleController::new(Arc::clone(&context.shortener));
    let mut indicator = CopyIndicator::default();

    writeln!(
        out,
        "{} Shortening with {}. Type {} to quit.",
        "ℹ".bold().blue(),
        controller.service_name().cyan(),
        "q".yellow()
    )?;

    loop {
        match controller.status() {
            SessionStatus::Idle => write!(out, "URL> ")?,
            _ => write!(out, "[c]opy, [r]emove, [q]uit> ")?,
        }
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("Session input closed");
            break;
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        match controller.status() {
            SessionStatus::Idle => {
                // 空输入交给控制器处理，保持与界面一致的提示
                let long_url = if line.is_empty() {
                    String::new()
                } else {
                    match normalize_long_url(line) {
                        Ok(url) => url,
                        Err(e) => {
                            writeln!(out, "{} {}", "⚠".yellow(), e)?;
                            continue;
                        }
                    }
                };

                controller.submit(&long_url).await;
                let session = controller.session();
                match session.short_url() {
                    Some(short_url) => {
                        print_short_link(out, session.long_url(), short_url, show_qr)?
                    }
                    None => {
                        if let Some(err) = session.last_error() {
                            writeln!(out, "{} {}", "✗".red().bold(), err)?;
                        }
                    }
                }
            }
            _ => match line.to_lowercase().as_str() {
                "c" | "copy" => {
                    if let Some(short_url) = controller.session().short_url() {
                        match indicator.copy(clipboard, short_url) {
                            Ok(()) => writeln!(out, "{} Copied!", "✓".green())?,
                            Err(_) => writeln!(
                                out,
                                "{} {}",
                                "✗".red().bold(),
                                indicator.error().unwrap_or_default()
                            )?,
                        }
                    }
                }
                "r" | "remove" => {
                    let answer = controller.remove_with(&LineGate::new(&mut *input, &mut *out));
                    match answer {
                        Some(Confirmation::Confirmed) => {
                            indicator.reset();
                            writeln!(out, "{} Short URL removed", "✓".green())?
                        }
                        Some(Confirmation::Cancelled) => writeln!(out, "Kept the short URL")?,
                        None => {}
                    }
                }
                other => writeln!(out, "{} Unknown command: {}", "⚠".yellow(), other)?,
            },
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Result as ScissorsResult, ScissorsError};
    use crate::services::{AuthError, AuthUser, IdentityProvider, ShorteningService};
    use async_trait::async_trait;
    use std::io::Cursor;

    struct EchoService;

    #[async_trait]
    impl ShorteningService for EchoService {
        async fn create(&self, long_url: &str) -> Result<String, ScissorsError> {
            if long_url.contains("fail") {
                Err(ScissorsError::create_failed("boom"))
            } else {
                Ok("https://tinyurl.com/abc".to_string())
            }
        }

        fn name(&self) -> &'static str {
            "Echo"
        }
    }

    struct NoIdentity;

    #[async_trait]
    impl IdentityProvider for NoIdentity {
        async fn sign_in(&self, _: &str, _: &str) -> Result<AuthUser, AuthError> {
            Err(AuthError::InvalidCredentials)
        }
        async fn sign_up(&self, _: &str, _: &str) -> Result<AuthUser, AuthError> {
            Err(AuthError::InvalidCredentials)
        }
        async fn send_password_reset(&self, _: &str) -> Result<(), AuthError> {
            Ok(())
        }
        fn name(&self) -> &'static str {
            "None"
        }
    }

    #[derive(Default)]
    struct MemoryClipboard(Option<String>);

    impl ClipboardSink for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> ScissorsResult<()> {
            self.0 = Some(text.to_string());
            Ok(())
        }
    }

    async fn run(script: &str) -> (String, MemoryClipboard) {
        colored::control::set_override(false);
        let context = StartupContext::new(Arc::new(EchoService), Arc::new(NoIdentity));
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let mut clipboard = MemoryClipboard::default();
        run_session_with(
            &context,
            &mut input,
            &mut output,
            &mut clipboard,
            false,
        )
        .await
        .unwrap();
        (String::from_utf8(output).unwrap(), clipboard)
    }

    #[tokio::test]
    async fn test_shorten_copy_and_remove() {
        let (out, clipboard) = run("example.com\nc\nr\ny\nq\n").await;
        assert!(out.contains("https://example.com -> https://tinyurl.com/abc"));
        assert!(out.contains("Copied!"));
        assert!(out.contains("Are you sure you want to remove the short URL? [y/N]: "));
        assert!(out.contains("Short URL removed"));
        assert_eq!(clipboard.0.as_deref(), Some("https://tinyurl.com/abc"));
    }

    #[tokio::test]
    async fn test_cancelled_removal_keeps_link() {
        let (out, _) = run("example.com\nr\nn\nc\n").await;
        assert!(out.contains("Kept the short URL"));
        assert!(out.contains("Copied!"));
        assert!(!out.contains("Short URL removed"));
    }

    #[tokio::test]
    async fn test_removal_answers_come_from_session_input() {
        // 先拒绝再确认，确认后回到 URL 输入
        let (out, _) = run("example.com\nr\nno\nr\nyes\nexample.org\n").await;
        let kept = out.find("Kept the short URL").unwrap();
        let removed = out.find("Short URL removed").unwrap();
        assert!(kept < removed);
        assert!(out.contains("https://example.org -> https://tinyurl.com/abc"));
        assert!(!out.contains("Unknown command"));
    }

    #[tokio::test]
    async fn test_removal_cancelled_at_end_of_input() {
        let (out, _) = run("example.com\nr\n").await;
        assert!(out.contains("Kept the short URL"));
    }

    #[tokio::test]
    async fn test_blank_and_failed_submissions() {
        let (out, _) = run("\nexample.com/fail\njavascript:alert(1)\n").await;
        assert!(out.contains("Please enter a URL to shorten"));
        assert!(out.contains("Failed to shorten the URL. Please try again."));
        assert!(out.contains("is not allowed"));
    }
}
