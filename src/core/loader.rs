use log::debug;
use serde::de::DeserializeOwned;

use super::model::{Dna, History, Stats};
use super::source::{ArtifactSource, DNA_FILE, HISTORY_FILE, STATS_FILE, SVG_FILE};
use crate::error::{Result, ViewerError};

/// Everything one load cycle brings back
#[derive(Debug, Clone, Default)]
pub struct MonkeySnapshot {
    pub dna: Dna,
    pub stats: Stats,
    pub history: History,
    pub svg: String,
}

/// Fetch the four artifacts one after another.
///
/// The first failed fetch or parse ends the cycle; nothing after it is
/// requested.
pub fn load_snapshot<S: ArtifactSource + ?Sized>(source: &S) -> Result<MonkeySnapshot> {
    let dna: Dna = fetch_json(source, DNA_FILE)?;
    let stats: Stats = fetch_json(source, STATS_FILE)?;
    let history: History = fetch_json(source, HISTORY_FILE)?;
    let svg = source.fetch_text(SVG_FILE)?;

    debug!(
        "loaded generation {} with {} traits and {} history entries",
        dna.generation(),
        dna.traits.len(),
        history.entries.len()
    );

    Ok(MonkeySnapshot {
        dna,
        stats,
        history,
        svg,
    })
}

fn fetch_json<S, T>(source: &S, name: &str) -> Result<T>
where
    S: ArtifactSource + ?Sized,
    T: DeserializeOwned,
{
    let body = source.fetch_text(name)?;
    serde_json::from_str(&body).map_err(|e| ViewerError::malformed(name, e))
}
