//! Configuration module for the pip-sentiment application.

pub mod analysis;

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod demo;
pub mod persistence;

// Re-export commonly used items
pub use analysis::{ANALYSIS, AnalysisConfig};
pub use demo::DEMO;
pub use persistence::{
    SERIES_FILENAME_WITHOUT_EXT, SERIES_PATH, SERIES_VERSION, series_snapshot_filename,
};
