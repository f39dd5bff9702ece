pub mod core;

// Re-export key components
pub use self::core::{Evaluation, evaluate};
