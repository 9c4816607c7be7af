use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;
use crate::session::SessionStatus;

pub fn draw_exiting_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Exit Scissors", popup::EXITING)
        .theme_color(Color::Magenta)
        .margin(Margin::new(2, 1))
        .render(frame, area);

    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to exit?",
            Style::default().fg(Color::White).bold(),
        )),
    ];
    // 短链接只保存在内存中
    if app.controller.status() != SessionStatus::Idle {
        text.push(Line::from(Span::styled(
            "The current short link will not be kept.",
            Style::default().fg(Color::Yellow),
        )));
    }
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "Press [y] to quit, [n] to cancel",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        inner_area,
    );
}
