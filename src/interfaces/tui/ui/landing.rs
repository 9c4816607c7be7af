//! 主界面：长链接输入 + 短链接展示

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::widgets::InputField;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{SPINNER_FRAMES, colors};
use crate::session::SessionStatus;

pub fn draw_landing_screen(frame: &mut Frame, app: &App, area: Rect) {
    let [intro_area, input_area, link_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Min(6),
    ])
    .areas(area);

    let intro = Paragraph::new(Line::from(vec![
        Span::styled("Shorten your links. ", Style::default().fg(Color::White).bold()),
        Span::styled(
            "Paste a long URL and press Enter.",
            Style::default().fg(colors::MUTED),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(intro, intro_area);

    let status = app.controller.status();
    InputField::new("Long URL", &app.url_input)
        .placeholder("https://example.com/very/long/path")
        .active(status == SessionStatus::Idle)
        .disabled(status != SessionStatus::Idle)
        .error(app.url_hint.as_deref())
        .render(frame, input_area);

    match status {
        SessionStatus::Idle => draw_empty_panel(frame, link_area),
        SessionStatus::Pending => draw_pending(frame, app, link_area),
        SessionStatus::Ready | SessionStatus::ConfirmingDelete => {
            draw_short_link(frame, app, link_area)
        }
    }
}

fn panel(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_empty_panel(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(Span::styled(
        "No short link yet",
        Style::default().fg(colors::MUTED),
    ))
    .alignment(Alignment::Center)
    .block(panel("Short Link", colors::MUTED));
    frame.render_widget(text, area);
}

fn draw_pending(frame: &mut Frame, app: &App, area: Rect) {
    let spinner = SPINNER_FRAMES[app.spinner_tick % SPINNER_FRAMES.len()];
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Shortening via {}...", spinner, app.controller.service_name()),
            Style::default().fg(colors::WARNING).bold(),
        )),
        Line::from(Span::styled(
            app.controller.session().long_url(),
            Style::default().fg(colors::MUTED),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(panel("Short Link", colors::WARNING)),
        area,
    );
}

fn short_link_lines<'a>(app: &'a App, short_url: &'a str) -> Vec<Line<'a>> {
    let copy_state = if app.copy_indicator.is_copied() {
        Span::styled("  Copied!", Style::default().fg(colors::SUCCESS).bold())
    } else if let Some(err) = app.copy_indicator.error() {
        Span::styled(format!("  {}", err), Style::default().fg(colors::ERROR))
    } else {
        Span::styled("  [c] Copy", Style::default().fg(colors::MUTED))
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(short_url, Style::default().fg(colors::PRIMARY).bold()),
            copy_state,
        ]),
        Line::from(vec![
            Span::styled("Original: ", Style::default().fg(colors::MUTED)),
            Span::styled(
                app.controller.session().long_url(),
                Style::default().fg(Color::Blue),
            ),
        ]),
    ];

    if let Some(qr) = &app.qr_code {
        lines.push(Line::from(""));
        lines.extend(qr.lines().map(|row| Line::from(row.to_string())));
    }
    lines
}

fn draw_short_link(frame: &mut Frame, app: &App, area: Rect) {
    let Some(short_url) = app.controller.session().short_url() else {
        return;
    };
    frame.render_widget(
        Paragraph::new(short_link_lines(app, short_url))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(panel("Short Link", colors::SUCCESS)),
        area,
    );
}
