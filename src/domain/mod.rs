// Domain types and value objects
pub mod bar;
pub mod pair;
pub mod signal;

// Re-export commonly used types
pub use bar::Bar;
pub use pair::ForexPair;
pub use signal::{Classification, Signal};
