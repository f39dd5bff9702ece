pub mod levels;
pub mod series;

// Re-export commonly used types
pub use levels::{RollingLevels, compute_levels, levels_at};
pub use series::Series;
