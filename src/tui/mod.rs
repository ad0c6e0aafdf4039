//! Terminal plumbing for the dashboard
//!
//! This module contains:
//! - Terminal setup and restore
//! - Input polling and event translation

mod events;
mod terminal;

pub use events::{EventLoop, TuiEvent};
pub use terminal::TerminalManager;
