//! 通用输入框组件
//!
//! 激活高亮、错误/提示行、密码遮蔽

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// ```rust,ignore
/// InputField::new("Email", &app.form.email)
///     .active(true)
///     .error(app.form.get_error(EditingField::Email).map(String::as_str))
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    error: Option<&'a str>,
    notice: Option<&'a str>,
    placeholder: Option<&'a str>,
    masked: bool,
    disabled: bool,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            error: None,
            notice: None,
            placeholder: None,
            masked: false,
            disabled: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// 非错误的提示（例如密码一致）
    pub fn notice(mut self, notice: Option<&'a str>) -> Self {
        self.notice = notice;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 设置密码遮蔽模式
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn display_title(&self) -> String {
        match self.placeholder {
            Some(placeholder) if self.value.is_empty() => {
                format!("{} ({})", self.title, placeholder)
            }
            _ => self.title.to_string(),
        }
    }

    fn border_style(&self) -> Style {
        if self.disabled {
            Style::default().fg(colors::MUTED)
        } else if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn display_value(&self) -> String {
        if self.masked {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.to_string()
        }
    }

    /// 渲染输入框，区域高度应为 4（输入框 3 行 + 提示 1 行）
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let [input_area, message_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

        let input = Paragraph::new(self.display_value()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, input_area);

        if let Some(error) = self.error {
            frame.render_widget(
                Paragraph::new(error).style(Style::default().fg(colors::ERROR)),
                message_area,
            );
        } else if let Some(notice) = self.notice {
            frame.render_widget(
                Paragraph::new(notice).style(Style::default().fg(colors::SUCCESS)),
                message_area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_only_when_empty() {
        let field = InputField::new("Long URL", "").placeholder("https://...");
        assert_eq!(field.display_title(), "Long URL (https://...)");

        let field = InputField::new("Long URL", "x").placeholder("https://...");
        assert_eq!(field.display_title(), "Long URL");
    }

    #[test]
    fn test_masked_counts_chars() {
        let field = InputField::new("Password", "pässwörd").masked(true);
        assert_eq!(field.display_value(), "********");
    }
}
