// Text presentation of an evaluation
pub mod config;
pub mod report;
pub mod text;
pub mod utils;

// Re-export the report entry point
pub use config::UI_CONFIG;
pub use report::render_report;
