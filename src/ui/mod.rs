// UI and formatting module

pub mod formatters;
pub mod prompts;
pub mod report;
pub mod view;
pub mod viewer_tui;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_percent, format_timestamp, title_case};
pub use prompts::{bold, success, warn};
pub use view::Page;
