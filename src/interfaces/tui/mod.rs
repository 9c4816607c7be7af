//! Terminal User Interface (TUI) module
//!
//! Interactive landing page for shortening a link, plus the account popups

use std::io;
use std::time::Duration;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, error};

mod app;
mod constants;
mod event_handler;
mod input_handler;
mod ui;

use crate::config::get_config;
use crate::errors::ScissorsError;
use crate::runtime::lifetime::StartupContext;
use app::{App, AppEvent};
use ui::ui;

/// Run the TUI application
pub async fn run_tui(context: StartupContext) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = setup_terminal()?;

    let ui_config = get_config().ui.clone();
    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = App::new(context, &ui_config, tx);
    let tick_rate = Duration::from_millis(ui_config.tick_rate_ms.max(10));
    let res = run_app(&mut terminal, &mut app, rx, tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("TUI loop failed: {}", err);
        eprintln!("Error: {:?}", err);
    }

    debug!("TUI closed");
    Ok(())
}

/// 把终端初始化失败包装成 `ScissorsError::Terminal`
fn terminal_error(stage: &'static str) -> impl FnOnce(io::Error) -> ScissorsError {
    move |err| ScissorsError::terminal(format!("{}: {}", stage, err))
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stderr>>, ScissorsError> {
    enable_raw_mode().map_err(terminal_error("failed to enable raw mode"))?;
    let mut stderr = io::stderr();
    if let Err(err) = execute!(stderr, EnterAlternateScreen) {
        // 已经进入 raw mode，失败时要还原
        let _ = disable_raw_mode();
        return Err(terminal_error("failed to enter alternate screen")(err));
    }
    Terminal::new(CrosstermBackend::new(stderr))
        .map_err(terminal_error("failed to create terminal"))
}

/// Main application loop
///
/// 后台任务的结果通过 channel 回传，每一帧先处理完再读键盘
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
    mut rx: UnboundedReceiver<AppEvent>,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        while let Ok(message) = rx.try_recv() {
            app.handle_app_event(message);
        }

        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key.code)?
        {
            return Ok(());
        }

        app.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_failures_are_terminal_errors() {
        let err = terminal_error("failed to enable raw mode")(io::Error::other("not a tty"));
        assert_eq!(
            err,
            ScissorsError::Terminal("failed to enable raw mode: not a tty".to_string())
        );
        assert_eq!(err.code(), "E009");
    }
}
