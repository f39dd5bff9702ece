use anyhow::{Context, Result};
use clap::Parser;
use strum::IntoEnumIterator;

use pip_sentiment::config::DEMO;
use pip_sentiment::data::series_file::{SeriesFile, SnapshotFormat};
use pip_sentiment::data::{SeriesSource, SyntheticSeries};
use pip_sentiment::domain::ForexPair;

/// Writes a seeded synthetic snapshot for every supported pair
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base seed; each pair offsets it by its position
    #[arg(long, default_value_t = DEMO.seed)]
    seed: u64,

    /// Bars per snapshot
    #[arg(long, default_value_t = DEMO.candles.max)]
    candles: usize,

    /// Write JSON instead of bincode
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    build_demo_series(&args)
}

fn build_demo_series(args: &Args) -> Result<()> {
    let format = if args.json {
        SnapshotFormat::Json
    } else {
        SnapshotFormat::Bincode
    };

    for (offset, pair) in ForexPair::iter().enumerate() {
        let seed = args.seed.wrapping_add(offset as u64);
        let series = SyntheticSeries::new(seed)
            .generate(args.candles)
            .with_context(|| format!("Failed to generate series for {}", pair))?;

        let output_path = SeriesFile::default_path(pair, format);
        SeriesFile::new(pair, series)
            .save_to_path(&output_path)
            .with_context(|| format!("Failed to write snapshot for {}", pair))?;

        log::info!(
            "✅ {} snapshot written to {:?} ({} bars, seed {})",
            pair,
            output_path,
            args.candles,
            seed
        );
    }
    Ok(())
}
