use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;
use crate::session::REMOVE_PROMPT;

pub fn draw_delete_confirm_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(short_url) = app.controller.session().short_url() else {
        return;
    };

    let inner_area = Popup::new("Remove Short URL", popup::DELETE_CONFIRM)
        .theme_color(Color::Red)
        .margin(Margin::new(2, 2))
        .render(frame, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            REMOVE_PROMPT,
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Short URL: ", Style::default().fg(Color::DarkGray)),
            Span::styled(short_url, Style::default().fg(Color::Cyan).bold()),
        ]),
        Line::from(vec![
            Span::styled("Long URL: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                app.controller.session().long_url(),
                Style::default().fg(Color::Blue),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[y] Confirm    [n] Cancel",
            Style::default().fg(Color::White),
        )),
    ];

    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        inner_area,
    );
}
