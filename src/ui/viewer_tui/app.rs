use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::refresh::Visibility;
use crate::core::source::ArtifactSource;
use crate::core::viewer::Viewer;

use super::event_handler::{key_to_event, ViewerEvent};
use super::render::render_ui;

/// Upper bound on how long the loop blocks waiting for input
const MAX_POLL: Duration = Duration::from_millis(250);

/// Viewer application state
pub struct ViewerApp<S: ArtifactSource> {
    pub viewer: Viewer<S>,
    pub should_quit: bool,
    pub show_help: bool,
    /// A manual reload waiting for the next frame to be drawn first
    pub pending_reload: bool,
}

impl<S: ArtifactSource> ViewerApp<S> {
    pub fn new(viewer: Viewer<S>) -> Self {
        Self {
            viewer,
            should_quit: false,
            show_help: false,
            pending_reload: false,
        }
    }

    pub fn alert_open(&self) -> bool {
        !self.viewer.page().alerts.is_empty()
    }

    /// Handle keyboard/focus events
    pub fn handle_event(&mut self, event: ViewerEvent, now: Instant) {
        match event {
            ViewerEvent::Quit => self.should_quit = true,
            ViewerEvent::ToggleHelp => self.show_help = !self.show_help,
            ViewerEvent::Reload => {
                self.pending_reload = true;
                self.viewer.page_mut().loading = true;
            }
            ViewerEvent::Download => {
                self.viewer.download();
            }
            ViewerEvent::DismissAlert => {
                self.viewer.page_mut().dismiss_alert();
            }
            ViewerEvent::Visibility(visibility) => self.viewer.set_visibility(visibility, now),
            ViewerEvent::None => {}
        }
    }

    /// Run a requested reload once the loading state has been drawn
    pub fn run_pending(&mut self) -> bool {
        if self.pending_reload {
            self.pending_reload = false;
            self.viewer.reload()
        } else {
            false
        }
    }
}

/// Run the viewer TUI application
pub fn run_viewer_app<S: ArtifactSource>(viewer: Viewer<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = ViewerApp::new(viewer);

    // Always restore the terminal, even if the loop failed
    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableFocusChange
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn run_loop<S: ArtifactSource>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut ViewerApp<S>,
) -> Result<()> {
    // Show the loading state before the first fetch
    app.viewer.page_mut().loading = true;
    terminal.draw(|frame| render_ui(frame, &*app))?;
    app.viewer.start(Instant::now());

    loop {
        terminal.draw(|frame| render_ui(frame, &*app))?;

        if app.pending_reload {
            app.run_pending();
            continue;
        }

        let timeout = app
            .viewer
            .refresh()
            .time_until_due(Instant::now())
            .map_or(MAX_POLL, |due| due.min(MAX_POLL));

        if event::poll(timeout).context("Event poll failed")? {
            let viewer_event = match event::read().context("Event read failed")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    key_to_event(key, app.alert_open())
                }
                Event::FocusLost => ViewerEvent::Visibility(Visibility::Hidden),
                Event::FocusGained => ViewerEvent::Visibility(Visibility::Visible),
                _ => ViewerEvent::None,
            };
            app.handle_event(viewer_event, Instant::now());
        }

        if app.should_quit {
            break;
        }

        app.viewer.tick(Instant::now());
    }

    Ok(())
}
