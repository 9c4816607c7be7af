//! 登录 / 注册 / 找回密码弹窗

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::{App, EditingField, FormKind};
use crate::interfaces::tui::constants::{SPINNER_FRAMES, colors, popup};

fn form_title(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Login => "Login",
        FormKind::Register => "Create Account",
        FormKind::ForgotPassword => "Reset Password",
    }
}

fn form_hint(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Login => "[F3] Register  [F4] Forgot password",
        FormKind::Register => "[F2] Already have an account? Login",
        FormKind::ForgotPassword => "We will email you a reset link  [F2] Login",
    }
}

pub fn draw_account_form(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.form;
    let size = match form.kind {
        FormKind::Login => popup::LOGIN,
        FormKind::Register => popup::REGISTER,
        FormKind::ForgotPassword => popup::FORGOT_PASSWORD,
    };

    let inner_area = Popup::new(form_title(form.kind), size)
        .theme_color(Color::Magenta)
        .margin(Margin::new(2, 1))
        .render(frame, area);

    let fields = form.kind.fields();
    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(4)).collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(1));
    let chunks = Layout::vertical(constraints).split(inner_area);

    for (i, field) in fields.iter().enumerate() {
        let notice = if *field == EditingField::Confirm {
            form.confirm_notice
        } else {
            None
        };
        InputField::new(field.display_title(), form.value(*field))
            .active(form.currently_editing == Some(*field))
            .disabled(form.pending)
            .masked(field.is_secret())
            .error(form.get_error(*field).map(String::as_str))
            .notice(notice)
            .render(frame, chunks[i]);
    }

    let footer = if form.pending {
        let spinner = SPINNER_FRAMES[app.spinner_tick % SPINNER_FRAMES.len()];
        Line::from(Span::styled(
            format!("{} Please wait...", spinner),
            Style::default().fg(colors::WARNING).bold(),
        ))
    } else {
        Line::from(vec![
            Span::styled("[Enter] Submit  ", Style::default().fg(colors::SUCCESS)),
            Span::styled(form_hint(form.kind), Style::default().fg(colors::MUTED)),
        ])
    };
    frame.render_widget(Paragraph::new(footer), chunks[fields.len() + 1]);
}
