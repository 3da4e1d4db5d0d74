//! showdeck core - bootstrap readiness logic with no I/O dependencies
//!
//! This crate decides whether the primary library view may be shown. It reads
//! per-domain load status, probes local storage once, and selects one of the
//! Error, Loading or Ready pages. Fetching, persistence and rendering are
//! reached through the traits in [`ports`] and handled by adapters.

pub mod domain;
pub mod ports;
pub mod app;
pub mod error;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
