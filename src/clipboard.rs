//! 剪贴板复制与 "Copied!" 提示

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::errors::{Result, ScissorsError};

pub const COPY_FAILED_MESSAGE: &str = "Failed to copy URL to clipboard. Please try again.";

/// 剪贴板写入接口，测试中可以替换
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard through arboard
#[derive(Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        // 每次复制时重新打开，避免长期持有 X11/Wayland 连接
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }
}

/// Time-boxed "Copied!" flag plus the last copy error
#[derive(Debug, Clone)]
pub struct CopyIndicator {
    copied_at: Option<Instant>,
    duration: Duration,
    error: Option<String>,
}

impl CopyIndicator {
    pub fn new(duration: Duration) -> Self {
        Self {
            copied_at: None,
            duration,
            error: None,
        }
    }

    /// 复制文本并更新提示状态
    pub fn copy(&mut self, sink: &mut dyn ClipboardSink, text: &str) -> Result<()> {
        self.copy_at(sink, text, Instant::now())
    }

    fn copy_at(&mut self, sink: &mut dyn ClipboardSink, text: &str, now: Instant) -> Result<()> {
        match sink.set_text(text) {
            Ok(()) => {
                debug!("Copied {} to clipboard", text);
                self.copied_at = Some(now);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                warn!("Clipboard write failed: {}", e);
                self.copied_at = None;
                self.error = Some(COPY_FAILED_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    pub fn is_copied(&self) -> bool {
        self.is_copied_at(Instant::now())
    }

    pub fn is_copied_at(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.duration)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn reset(&mut self) {
        self.copied_at = None;
        self.error = None;
    }
}

impl Default for CopyIndicator {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

/// 一次性复制，用于 CLI
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    SystemClipboard.set_text(text).map_err(|e| {
        warn!("Clipboard write failed: {}", e);
        ScissorsError::clipboard(COPY_FAILED_MESSAGE)
    })
}
