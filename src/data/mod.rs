// Series sources and headline input
pub mod headlines;
pub mod series_file;
pub mod synthetic;

use anyhow::{Result, anyhow};

use crate::models::Series;

pub use headlines::{parse_headlines, read_headlines};
pub use series_file::SeriesFile;
pub use synthetic::SyntheticSeries;

/// Anything that can hand the core a series of bars: a seeded generator, a saved
/// snapshot, or a live market-data feed.
pub trait SeriesSource {
    // Either produce up to `count` bars OR return an anyhow::error
    fn generate(&self, count: usize) -> Result<Series>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Tries each source in order and returns the first series produced, with its signature.
pub fn load_series(
    sources: &[Box<dyn SeriesSource>],
    count: usize,
) -> Result<(Series, &'static str)> {
    for source in sources {
        match source.generate(count) {
            Ok(series) => return Ok((series, source.signature())),
            Err(e) => {
                log::warn!("⚠️  Series source '{}' failed: {:#}", source.signature(), e);
                // Continue to the next source
            }
        }
    }
    Err(anyhow!("All series sources failed to produce data"))
}
