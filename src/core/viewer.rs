//! The monkey viewer component.
//!
//! Owns the artifact source, the page state, the auto-refresh controller and
//! the exporter. All methods run on the caller's thread and a load cycle
//! completes before the next one can start.

use std::path::PathBuf;
use std::time::Instant;

use chrono::Local;
use log::{error, info, warn};

use super::export::Exporter;
use super::loader::{load_snapshot, MonkeySnapshot};
use super::refresh::{AutoRefresh, Visibility};
use super::source::ArtifactSource;
use super::svg::SvgPolicy;
use crate::error::{Result, ViewerError};
use crate::ui::view::{
    header_view, history_view, identity_view, trait_cards, MonkeyPanel, Page, NO_MONKEY_ALERT,
};

pub struct Viewer<S: ArtifactSource> {
    source: S,
    page: Page,
    refresh: AutoRefresh,
    exporter: Exporter,
    svg_policy: SvgPolicy,
    load_count: u64,
}

impl<S: ArtifactSource> Viewer<S> {
    pub fn new(source: S, refresh: AutoRefresh, exporter: Exporter, svg_policy: SvgPolicy) -> Self {
        Self {
            source,
            page: Page::default(),
            refresh,
            exporter,
            svg_policy,
            load_count: 0,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn refresh(&self) -> &AutoRefresh {
        &self.refresh
    }

    /// Number of load cycles attempted so far
    pub fn load_count(&self) -> u64 {
        self.load_count
    }

    /// First load plus arming the timer, as on startup
    pub fn start(&mut self, now: Instant) -> bool {
        let loaded = self.reload();
        self.refresh.start(now);
        loaded
    }

    /// Run one load cycle. Failures are logged and shown in the artwork
    /// panel, never returned. Returns whether the cycle succeeded.
    pub fn reload(&mut self) -> bool {
        self.load_count += 1;
        self.page.loading = true;

        let loaded = match load_snapshot(&self.source) {
            Ok(snapshot) => {
                self.apply(snapshot);
                true
            }
            Err(e) => {
                error!("Error loading monkey data from {}: {}", self.source.describe(), e);
                self.page.monkey = MonkeyPanel::load_error();
                false
            }
        };

        self.page.loading = false;
        loaded
    }

    fn apply(&mut self, snapshot: MonkeySnapshot) {
        let MonkeySnapshot {
            dna,
            stats,
            history,
            svg,
        } = snapshot;

        self.page.header = Some(header_view(&dna, &stats));
        self.page.monkey = MonkeyPanel::artwork(self.svg_policy.apply(&svg));
        self.page.identity = Some(identity_view(&dna));
        self.page.traits = trait_cards(&dna.traits);
        self.page.history = Some(history_view(&history.entries));
        self.page.last_updated = Some(Local::now());
    }

    /// Save the currently shown artwork.
    ///
    /// With nothing to save an alert is queued and `None` returned.
    pub fn download(&mut self) -> Option<PathBuf> {
        let Some(element) = self.page.monkey.svg_element().map(str::to_string) else {
            self.page.alert(NO_MONKEY_ALERT);
            return None;
        };

        match self.exporter.export(&element) {
            Ok(path) => {
                self.page.status = Some(format!("Saved {}", path.display()));
                Some(path)
            }
            Err(e) => {
                warn!("Export failed: {}", e);
                self.page.alert(format!("Download failed: {}", e));
                None
            }
        }
    }

    /// Like [`Viewer::download`], for callers that want the error
    pub fn try_download(&self) -> Result<PathBuf> {
        let element = self
            .page
            .monkey
            .svg_element()
            .ok_or(ViewerError::NoSubjectToExport)?;
        self.exporter.export(element)
    }

    /// Visibility change from the host. Reloads at once when shown again.
    pub fn set_visibility(&mut self, visibility: Visibility, now: Instant) {
        info!("visibility changed to {:?}", visibility);
        if self.refresh.on_visibility(visibility, now) {
            self.reload();
        }
    }

    /// Timer check from the event loop. Returns whether a reload ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.refresh.poll(now) {
            self.reload();
            true
        } else {
            false
        }
    }
}
