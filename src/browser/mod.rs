//! Browser automation module
//!
//! Handles launching and controlling the Chrome instance the workflow
//! scenarios drive, plus the page-level waits and actions built on it.

mod actions;
mod errors;
mod session;

pub use actions::{PageActions, POLL_INTERVAL};
pub use errors::BrowserError;
pub use session::{BrowserSession, BrowserSessionConfig};
