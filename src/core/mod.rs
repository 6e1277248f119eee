// Core business logic module

pub mod config;
pub mod export;
pub mod loader;
pub mod model;
pub mod refresh;
pub mod source;
pub mod svg;
pub mod viewer;

// Re-export commonly used items
pub use config::ViewerConfig;
pub use export::Exporter;
pub use loader::{load_snapshot, MonkeySnapshot};
pub use model::{Dna, History, HistoryEntry, Rarity, Stats, Trait};
pub use refresh::{AutoRefresh, Visibility};
pub use source::{ArtifactSource, DirSource, HttpSource};
pub use svg::SvgPolicy;
pub use viewer::Viewer;
