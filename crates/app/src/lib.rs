//! showdeck application library
//!
//! Adapters, the application service and the TUI, exposed for testing.

pub mod adapters;
pub mod cli;
pub mod services;
pub mod shell;
pub mod tui;
