use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::session::SessionStatus;

/// Draw title bar with version and account state
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let account = match app.signed_in_user() {
        Some(user) => Span::styled(
            format!("Signed in as {}", user.email),
            Style::default().fg(Color::Green),
        ),
        None => Span::styled("Not signed in", Style::default().fg(Color::DarkGray)),
    };

    let title_text = vec![Line::from(vec![
        Span::styled("Scissors", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} ", app.controller.service_name()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        account,
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default().fg(Color::White).bg(Color::Red).bold(),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[SUCCESS] {}", app.status_message),
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(Color::Cyan))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

fn shortcuts(app: &App) -> Vec<(&'static str, &'static str, Color)> {
    match app.current_screen {
        CurrentScreen::Landing => {
            let account = if app.signed_in_user().is_some() {
                ("F2", "Logout", Color::Magenta)
            } else {
                ("F2", "Login", Color::Magenta)
            };
            match app.controller.status() {
                SessionStatus::Idle => vec![
                    ("Enter", "Shorten", Color::Green),
                    ("Esc", "Clear / Quit", Color::Red),
                    ("F1", "Help", Color::Blue),
                    account,
                    ("F3", "Register", Color::Magenta),
                ],
                SessionStatus::Pending => vec![("Esc", "Quit", Color::Red)],
                SessionStatus::Ready | SessionStatus::ConfirmingDelete => vec![
                    ("c", "Copy", Color::Green),
                    ("d", "Remove", Color::Red),
                    ("?", "Help", Color::Blue),
                    account,
                    ("q", "Quit", Color::Magenta),
                ],
            }
        }
        CurrentScreen::Login | CurrentScreen::Register | CurrentScreen::ForgotPassword => vec![
            ("Tab", "Switch Field", Color::Cyan),
            ("Enter", "Submit", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::DeleteConfirm | CurrentScreen::Exiting => {
            vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)]
        }
        CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
    }
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
