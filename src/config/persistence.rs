//! File persistence and serialization configuration

use crate::domain::ForexPair;

/// Directory path for storing series snapshots
pub const SERIES_PATH: &str = "series_data";

/// Base filename for series snapshots (without extension)
pub const SERIES_FILENAME_WITHOUT_EXT: &str = "series";

/// Current version of the snapshot serialization format
pub const SERIES_VERSION: f64 = 1.0;

/// Generate pair-specific snapshot filename
/// Example: "series_EURUSD_v1.bin" or "series_GBPUSD_v1.json"
pub fn series_snapshot_filename(pair: ForexPair, extension: &str) -> String {
    format!(
        "{}_{}_v{}.{}",
        SERIES_FILENAME_WITHOUT_EXT,
        pair.code(),
        SERIES_VERSION,
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_includes_pair_code_and_version() {
        assert_eq!(
            series_snapshot_filename(ForexPair::EurUsd, "bin"),
            "series_EURUSD_v1.bin"
        );
    }
}
