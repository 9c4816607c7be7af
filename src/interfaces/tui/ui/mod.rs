// UI submodules
mod account_forms;
mod common;
mod delete_confirm;
mod exiting;
mod help;
mod landing;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};

pub use account_forms::draw_account_form;
pub use delete_confirm::draw_delete_confirm_screen;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use landing::draw_landing_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let [title_area, content_area, status_area, footer_area] = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(10),   // Main content
        Constraint::Length(3), // Status
        Constraint::Length(2), // Footer
    ])
    .areas(frame.area());

    draw_title_bar(frame, app, title_area);

    // 弹窗都叠加在主界面之上
    draw_landing_screen(frame, app, content_area);
    match app.current_screen {
        CurrentScreen::Landing => {}
        CurrentScreen::DeleteConfirm => draw_delete_confirm_screen(frame, app, content_area),
        CurrentScreen::Login | CurrentScreen::Register | CurrentScreen::ForgotPassword => {
            draw_account_form(frame, app, content_area)
        }
        CurrentScreen::Help => draw_help_screen(frame, content_area),
        CurrentScreen::Exiting => draw_exiting_screen(frame, app, content_area),
    }

    draw_status_bar(frame, app, status_area);
    draw_footer(frame, app, footer_area);
}
