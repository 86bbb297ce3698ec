//! View and UI layer
//!
//! Stateless render functions over the app state. Each returns whatever
//! layout information the input handling needs for hit testing.

pub mod id_card;
pub mod intro_view;
pub mod terminal_view;
pub mod theme;
