//! Drawable projections of session state.

pub mod projection;

pub use projection::{HistoryEntry, RenderView};
