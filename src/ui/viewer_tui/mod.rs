//! Terminal User Interface for watching the monkey.
//!
//! Provides a live dashboard using ratatui.

mod app;
mod event_handler;
mod render;
mod widgets;

pub use app::{run_viewer_app, ViewerApp};
pub use event_handler::{key_to_event, ViewerEvent};
