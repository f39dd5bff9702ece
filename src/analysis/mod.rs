// Analysis algorithms: breakout detection, sentiment scoring, signal construction
pub mod breakout;
pub mod combiner;
pub mod lexicon;
pub mod sentiment;

// Re-export commonly used types
pub use breakout::{BreakoutReading, classify_breakout};
pub use combiner::combine;
pub use lexicon::LexiconScorer;
pub use sentiment::{AggregateSentiment, PolarityScorer, SentimentLabel, aggregate_sentiment};
