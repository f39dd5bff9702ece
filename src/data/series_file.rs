use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::config::{DEBUG_FLAGS, SERIES_PATH, SERIES_VERSION, series_snapshot_filename};
use crate::data::SeriesSource;
use crate::domain::ForexPair;
use crate::models::Series;
use crate::utils::time_utils::{epoch_ms_to_utc, now_timestamp_ms};

/// On-disk encoding, chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// Compact binary (`.bin`)
    Bincode,
    /// Human-editable (`.json`)
    Json,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SnapshotFormat::Json,
            _ => SnapshotFormat::Bincode,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SnapshotFormat::Bincode => "bin",
            SnapshotFormat::Json => "json",
        }
    }
}

/// Serialized series snapshot. Bars are re-validated on load.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SeriesFile {
    pub version: f64,
    pub timestamp_ms: i64,
    pub pair: ForexPair,
    pub series: Series,
}

impl SeriesFile {
    pub fn new(pair: ForexPair, series: Series) -> Self {
        Self {
            version: SERIES_VERSION,
            timestamp_ms: now_timestamp_ms(),
            pair,
            series,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open series file: {:?}", path))?;
        let mut reader = BufReader::new(file);
        let snapshot: SeriesFile = match SnapshotFormat::from_path(path) {
            SnapshotFormat::Json => serde_json::from_reader(reader)
                .context(format!("Failed to parse series JSON: {:?}", path))?,
            SnapshotFormat::Bincode => bincode::deserialize_from(&mut reader)
                .context(format!("Failed to deserialize series: {:?}", path))?,
        };

        if DEBUG_FLAGS.print_series_io {
            log::debug!(
                "Loaded {} bars for {} from {:?} (v{}, written {})",
                snapshot.series.len(),
                snapshot.pair,
                path,
                snapshot.version,
                epoch_ms_to_utc(snapshot.timestamp_ms)
            );
        }
        Ok(snapshot)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        match SnapshotFormat::from_path(path) {
            SnapshotFormat::Json => serde_json::to_writer_pretty(&mut writer, self)
                .context(format!("Failed to write series JSON to: {}", path.display()))?,
            SnapshotFormat::Bincode => bincode::serialize_into(&mut writer, self)
                .context(format!("Failed to serialize series to: {}", path.display()))?,
        }

        if DEBUG_FLAGS.print_series_io {
            log::debug!("Saved {} bars to {}", self.series.len(), path.display());
        }
        Ok(())
    }

    pub fn default_path(pair: ForexPair, format: SnapshotFormat) -> PathBuf {
        PathBuf::from(SERIES_PATH).join(series_snapshot_filename(pair, format.extension()))
    }
}

/// Reads bars from a saved snapshot instead of generating them.
pub struct SnapshotSource {
    pub path: PathBuf,
    /// When set, a snapshot for a different pair is refused
    pub expected_pair: Option<ForexPair>,
}

impl SeriesSource for SnapshotSource {
    fn generate(&self, count: usize) -> Result<Series> {
        let snapshot = SeriesFile::load_from_path(&self.path)?;

        if snapshot.version != SERIES_VERSION {
            bail!(
                "Snapshot version mismatch: file v{} vs required v{}",
                snapshot.version,
                SERIES_VERSION
            );
        }
        if let Some(pair) = self.expected_pair
            && snapshot.pair != pair
        {
            bail!("Snapshot holds {} but {} was requested", snapshot.pair, pair);
        }

        let series = snapshot
            .series
            .tail(count)
            .context("Snapshot tail is not a valid series")?;
        Ok(series)
    }

    fn signature(&self) -> &'static str {
        "snapshot"
    }
}
