//! Display projections of the loaded artifacts.
//!
//! [`Page`] is the whole screen state. Each section is rebuilt from the
//! snapshot on a successful load and left untouched otherwise.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};

use super::formatters::{format_percent, format_timestamp, locale_compare, title_case};
use crate::core::model::{Dna, HistoryEntry, Rarity, Stats, Trait};
use crate::core::svg::{find_svg_element, SvgSummary};

pub const LOAD_ERROR_MESSAGE: &str =
    "Failed to load monkey data. Make sure you have initialized a monkey first!";
pub const LOAD_ERROR_HINT: &str = "Run: python src/cli.py init";
pub const EMPTY_HISTORY_MESSAGE: &str = "No evolution history yet. Your monkey will evolve daily!";
pub const NO_MONKEY_ALERT: &str = "No monkey to download!";

/// Number of history entries shown, newest first
pub const HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub generation: String,
    pub age: String,
    pub rarity: String,
}

pub fn header_view(dna: &Dna, stats: &Stats) -> HeaderView {
    HeaderView {
        generation: dna.generation().to_string(),
        age: format!("{}d", stats.age_days()),
        rarity: format_percent(stats.rarity_score()),
    }
}

/// Contents of the artwork area
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MonkeyPanel {
    #[default]
    Empty,
    Artwork {
        markup: String,
        summary: Option<SvgSummary>,
    },
    Error {
        message: String,
        hint: String,
    },
}

impl MonkeyPanel {
    pub fn artwork(markup: String) -> Self {
        let summary = SvgSummary::from_markup(&markup);
        MonkeyPanel::Artwork { markup, summary }
    }

    pub fn load_error() -> Self {
        MonkeyPanel::Error {
            message: LOAD_ERROR_MESSAGE.to_string(),
            hint: LOAD_ERROR_HINT.to_string(),
        }
    }

    /// The rendered `<svg>` element, if the panel holds one
    pub fn svg_element(&self) -> Option<&str> {
        match self {
            MonkeyPanel::Artwork { markup, .. } => find_svg_element(markup),
            _ => None,
        }
    }
}

/// DNA identity lines under the artwork
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityView {
    pub dna_hash: String,
    pub mutations: String,
    pub parent: String,
}

pub fn identity_view(dna: &Dna) -> IdentityView {
    IdentityView {
        dna_hash: dna.dna_hash().to_string(),
        mutations: dna.mutation_count().to_string(),
        parent: dna.parent().to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraitCard {
    pub key: String,
    pub category: String,
    pub value: String,
    pub rarity: Rarity,
}

/// One card per trait category, ordered by category name
pub fn trait_cards(traits: &BTreeMap<String, Trait>) -> Vec<TraitCard> {
    let mut entries: Vec<(&String, &Trait)> = traits.iter().collect();
    entries.sort_by(|a, b| locale_compare(a.0, b.0));

    entries
        .into_iter()
        .map(|(key, t)| TraitCard {
            key: key.clone(),
            category: title_case(key),
            value: title_case(&t.value),
            rarity: t.rarity.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryItem {
    pub date: String,
    pub story: String,
    pub generation: String,
    pub mutations: String,
    pub rarity: String,
}

fn history_item(entry: &HistoryEntry) -> HistoryItem {
    HistoryItem {
        date: format_timestamp(&entry.timestamp),
        story: entry.story().to_string(),
        generation: entry.generation.to_string(),
        mutations: entry.mutation_count.to_string(),
        rarity: format_percent(entry.rarity_score()),
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryView {
    /// Total number of entries, not just the ones shown
    pub count: usize,
    pub items: Vec<HistoryItem>,
}

impl HistoryView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        if self.is_empty() {
            Some(EMPTY_HISTORY_MESSAGE)
        } else {
            None
        }
    }
}

/// Newest entries first, capped at [`HISTORY_LIMIT`]
pub fn history_view(entries: &[HistoryEntry]) -> HistoryView {
    HistoryView {
        count: entries.len(),
        items: entries
            .iter()
            .rev()
            .take(HISTORY_LIMIT)
            .map(history_item)
            .collect(),
    }
}

/// Everything the dashboard shows
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub loading: bool,
    pub header: Option<HeaderView>,
    pub monkey: MonkeyPanel,
    pub identity: Option<IdentityView>,
    pub traits: Vec<TraitCard>,
    pub history: Option<HistoryView>,
    /// Pending user-facing alerts, oldest first
    pub alerts: Vec<String>,
    /// One-line status message for the footer
    pub status: Option<String>,
    pub last_updated: Option<DateTime<Local>>,
}

impl Page {
    pub fn alert<S: Into<String>>(&mut self, message: S) {
        self.alerts.push(message.into());
    }

    pub fn dismiss_alert(&mut self) -> Option<String> {
        if self.alerts.is_empty() {
            None
        } else {
            Some(self.alerts.remove(0))
        }
    }
}
