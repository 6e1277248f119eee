// Shared fixtures for the integration tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use monkey_viewer::core::source::{ArtifactSource, DNA_FILE, HISTORY_FILE, STATS_FILE, SVG_FILE};
use monkey_viewer::{Result, ViewerError};

pub const DNA_JSON: &str = r#"{
  "generation": 3,
  "dna_hash": "7f3a9c2e",
  "mutation_count": 5,
  "parent_id": "b41d0e77",
  "traits": {
    "fur_color": {"value": "golden_brown", "rarity": "rare"},
    "eye_shape": {"value": "round", "rarity": "common"},
    "tail_length": {"value": "extra_long", "rarity": "legendary"}
  }
}"#;

pub const STATS_JSON: &str = r#"{"dna_hash": "7f3a9c2e", "age_days": 12, "rarity_score": 67.89}"#;

pub const SVG_TEXT: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="400" height="400" viewBox="0 0 400 400">
  <rect width="400" height="400" fill="#87CEEB"/>
  <circle cx="200" cy="220" r="90" fill="#8B4513"/>
</svg>
"##;

/// History JSON with `n` entries, one per day, oldest first
pub fn history_json(n: usize) -> String {
    let entries: Vec<String> = (1..=n)
        .map(|i| {
            format!(
                r#"{{"timestamp": "2025-01-{:02}T08:30:00", "story": "Day {} of evolving", "generation": {}, "mutation_count": {}, "rarity_score": {}.4}}"#,
                i, i, i, i * 2, i
            )
        })
        .collect();
    format!(r#"{{"entries": [{}]}}"#, entries.join(","))
}

/// In-memory artifact set that records every request
pub struct FakeSource {
    pub files: RefCell<HashMap<String, String>>,
    pub statuses: RefCell<HashMap<String, u16>>,
    pub requests: Cell<usize>,
}

impl FakeSource {
    pub fn complete(history_entries: usize) -> Self {
        let mut files = HashMap::new();
        files.insert(DNA_FILE.to_string(), DNA_JSON.to_string());
        files.insert(STATS_FILE.to_string(), STATS_JSON.to_string());
        files.insert(HISTORY_FILE.to_string(), history_json(history_entries));
        files.insert(SVG_FILE.to_string(), SVG_TEXT.to_string());
        Self {
            files: RefCell::new(files),
            statuses: RefCell::new(HashMap::new()),
            requests: Cell::new(0),
        }
    }

    pub fn set(&self, name: &str, body: &str) {
        self.files
            .borrow_mut()
            .insert(name.to_string(), body.to_string());
    }

    /// Make `name` answer with an HTTP error status
    pub fn fail_with(&self, name: &str, status: u16) {
        self.statuses.borrow_mut().insert(name.to_string(), status);
    }

    pub fn heal(&self, name: &str) {
        self.statuses.borrow_mut().remove(name);
    }
}

impl ArtifactSource for FakeSource {
    fn describe(&self) -> String {
        "fake://monkey_data/".to_string()
    }

    fn fetch_text(&self, name: &str) -> Result<String> {
        self.requests.set(self.requests.get() + 1);

        if let Some(status) = self.statuses.borrow().get(name) {
            return Err(ViewerError::not_found(name, *status));
        }

        self.files
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| ViewerError::not_found(name, 404))
    }
}

/// Write a full monkey_data directory
pub fn write_monkey_data(dir: &Path, history_entries: usize) {
    fs::write(dir.join(DNA_FILE), DNA_JSON).unwrap();
    fs::write(dir.join(STATS_FILE), STATS_JSON).unwrap();
    fs::write(dir.join(HISTORY_FILE), history_json(history_entries)).unwrap();
    fs::write(dir.join(SVG_FILE), SVG_TEXT).unwrap();
}
