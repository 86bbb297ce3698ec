// Portfolio library - exposes all core modules for testing

pub mod app;
pub mod config;
pub mod content;
pub mod model;
pub mod services;
pub mod view;
