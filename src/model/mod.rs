//! Session state of the terminal: history, command table and card physics.

pub mod command_table;
pub mod history;
pub mod physics;
