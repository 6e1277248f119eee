//! View models for the artifacts written by the monkey generator.
//!
//! Every field is optional on the wire. The display accessors fold missing or
//! empty values into the defaults the dashboard shows, so rendering never
//! fails on a partial document.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_GENERATION: u64 = 1;
pub const UNKNOWN_HASH: &str = "Unknown";
pub const GENESIS_PARENT: &str = "Genesis";
pub const DEFAULT_STORY: &str = "Evolution occurred";

/// Rarity tier of a single trait
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Legendary,
    /// Any tier name outside the known set, kept verbatim
    Other(String),
}

impl Rarity {
    pub fn as_str(&self) -> &str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
            Rarity::Other(name) => name,
        }
    }

    /// Palette entry for the tier as an RGB triple
    pub fn color(&self) -> Option<(u8, u8, u8)> {
        match self {
            Rarity::Common => Some((0x00, 0xff, 0x88)),
            Rarity::Uncommon => Some((0xff, 0xd9, 0x3d)),
            Rarity::Rare => Some((0xff, 0x6b, 0x9d)),
            Rarity::Legendary => Some((0xff, 0xd7, 0x00)),
            Rarity::Other(_) => None,
        }
    }
}

impl From<String> for Rarity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "common" => Rarity::Common,
            "uncommon" => Rarity::Uncommon,
            "rare" => Rarity::Rare,
            "legendary" => Rarity::Legendary,
            _ => Rarity::Other(value),
        }
    }
}

impl From<Rarity> for String {
    fn from(value: Rarity) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named characteristic of the monkey
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trait {
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rarity: Rarity,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dna {
    #[serde(default)]
    pub generation: Option<u64>,
    #[serde(default)]
    pub dna_hash: Option<String>,
    #[serde(default)]
    pub mutation_count: Option<u64>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub traits: BTreeMap<String, Trait>,
}

impl Dna {
    pub fn generation(&self) -> u64 {
        self.generation
            .filter(|g| *g > 0)
            .unwrap_or(DEFAULT_GENERATION)
    }

    pub fn dna_hash(&self) -> &str {
        non_empty(self.dna_hash.as_deref()).unwrap_or(UNKNOWN_HASH)
    }

    pub fn mutation_count(&self) -> u64 {
        self.mutation_count.unwrap_or(0)
    }

    pub fn parent(&self) -> &str {
        non_empty(self.parent_id.as_deref()).unwrap_or(GENESIS_PARENT)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub age_days: Option<u64>,
    #[serde(default)]
    pub rarity_score: Option<f64>,
}

impl Stats {
    pub fn age_days(&self) -> u64 {
        self.age_days.unwrap_or(0)
    }

    pub fn rarity_score(&self) -> f64 {
        self.rarity_score.unwrap_or(0.0)
    }
}

/// One recorded evolution event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub generation: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mutation_count: u64,
    #[serde(default)]
    pub rarity_score: Option<f64>,
}

impl HistoryEntry {
    pub fn story(&self) -> &str {
        non_empty(self.story.as_deref()).unwrap_or(DEFAULT_STORY)
    }

    pub fn rarity_score(&self) -> f64 {
        self.rarity_score.unwrap_or(0.0)
    }
}

/// Evolution log, oldest entry first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<HistoryEntry>,
}

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
