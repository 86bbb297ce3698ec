//! Runtime services: time, timers, logging and terminal lifecycle.
//!
//! Nothing in here knows about portfolio content.

pub mod log_dirs;
pub mod terminal_modes;
pub mod time_source;
pub mod timers;
pub mod tracing_setup;
