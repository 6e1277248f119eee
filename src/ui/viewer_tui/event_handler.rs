use crossterm::event::{KeyCode, KeyEvent};

use crate::core::refresh::Visibility;

/// Events that can occur in the viewer TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    /// Quit the application
    Quit,
    /// Toggle help overlay
    ToggleHelp,
    /// Fetch all artifacts again
    Reload,
    /// Save the current artwork
    Download,
    /// Close the oldest pending alert
    DismissAlert,
    /// Terminal focus changed
    Visibility(Visibility),
    /// No action
    None,
}

/// Map a key press to an event. Modifiers are not inspected.
pub fn key_to_event(key: KeyEvent, alert_open: bool) -> ViewerEvent {
    if alert_open {
        return ViewerEvent::DismissAlert;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => ViewerEvent::Quit,
        KeyCode::Char('?') | KeyCode::Char('h') => ViewerEvent::ToggleHelp,
        KeyCode::Char('r') | KeyCode::Char('R') => ViewerEvent::Reload,
        KeyCode::Char('d') | KeyCode::Char('D') => ViewerEvent::Download,
        _ => ViewerEvent::None,
    }
}
