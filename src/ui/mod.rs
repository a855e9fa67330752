//! Terminal front end built on ratatui.

pub mod app;
pub mod game_view;

pub use app::{App, Focus};
