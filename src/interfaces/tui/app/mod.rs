//! TUI application state and operations
//!
//! - `state`: App struct, screens, form state
//! - `link_operations`: create / copy / remove the short link
//! - `auth_operations`: login, registration, password reset, logout

mod auth_operations;
mod link_operations;
mod state;

pub use state::{App, AppEvent, CurrentScreen, EditingField, FormKind, FormState};

#[cfg(test)]
pub(crate) mod test_support;
