use anyhow::{Context, Result};
use clap::Parser;

use pip_sentiment::config::DEMO;
use pip_sentiment::data::series_file::SnapshotSource;
use pip_sentiment::data::{SeriesSource, SyntheticSeries, load_series, read_headlines};
use pip_sentiment::ui::render_report;
use pip_sentiment::{Cli, LexiconScorer, evaluate};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::debug!("Parsed arguments: {:?}", args);

    let config = args.analysis_config();
    config.validate().context("Invalid analysis parameters")?;

    // C. Series: snapshot first when given, synthetic otherwise
    let mut sources: Vec<Box<dyn SeriesSource>> = Vec::new();
    if let Some(path) = &args.series {
        sources.push(Box::new(SnapshotSource {
            path: path.clone(),
            expected_pair: Some(args.pair),
        }));
    } else {
        sources.push(Box::new(SyntheticSeries::new(args.seed)));
    }
    let (series, signature) = load_series(&sources, args.candles)?;
    log::info!("📈 Loaded {} bars from {} source", series.len(), signature);

    // D. Headlines
    let headlines: Vec<String> = match &args.headlines {
        Some(path) => read_headlines(path)?,
        None => DEMO.headlines.iter().map(|h| h.to_string()).collect(),
    };

    // E. Evaluate and present
    let scorer = LexiconScorer::new();
    let evaluation = evaluate(&series, &headlines, &config, &scorer)?;

    if evaluation.signal.is_actionable() {
        log::info!(
            "🚦 {} signal on bar {} ({:.1} pips past the level)",
            evaluation.signal.classification,
            evaluation.signal.bar_index,
            evaluation.signal.pip_distance.unwrap_or_default()
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!("{}", render_report(&evaluation));
    }
    Ok(())
}
