//! System-level modules
//!
//! - Logging initialization
//! - Panic hook (crash.log)

pub mod logging;
pub mod panic_handler;

pub use logging::{LogTarget, init_logging};
pub use panic_handler::{RunMode, install_panic_hook};
