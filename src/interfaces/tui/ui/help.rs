use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "SHORTEN",
        &[
            ("Enter", "Create a short URL from the input"),
            ("Backspace", "Delete last character"),
            ("Esc", "Clear input, quit when empty"),
        ],
    ),
    (
        "SHORT LINK",
        &[
            ("c, y", "Copy short URL to clipboard"),
            ("d, r, Del", "Remove short link"),
        ],
    ),
    (
        "ACCOUNT",
        &[
            ("F2", "Login / Logout"),
            ("F3", "Register"),
            ("F4", "Forgot password (in forms)"),
            ("Tab, Up/Down", "Switch form field"),
        ],
    ),
    (
        "OTHER",
        &[("F1, ?", "Show this help"), ("q", "Quit")],
    ),
];

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (title, keys) in SECTIONS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            *title,
            Style::default().fg(Color::Yellow).bold(),
        )));
        for (key, desc) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<16}", key), Style::default().fg(Color::Cyan)),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Esc or q to close",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP)
        .margin(Margin::new(2, 1))
        .render(frame, area);

    frame.render_widget(Paragraph::new(help_lines()), inner_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_mentions_every_section() {
        let text: String = help_lines()
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        for (title, _) in SECTIONS {
            assert!(text.contains(title));
        }
        assert!(text.contains("Copy short URL"));
    }
}
