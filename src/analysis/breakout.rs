use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, DEBUG_FLAGS};
use crate::domain::Classification;
use crate::error::Result;
use crate::models::{Series, levels_at};
use crate::utils::maths_utils::price_to_pips;

/// Classification of the last bar plus the values that justify it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakoutReading {
    pub classification: Classification,
    /// Index of the evaluated (last) bar
    pub index: usize,
    /// Close of the evaluated bar
    pub trigger_price: f64,
    pub support: Option<f64>,
    pub resistance: Option<f64>,
    /// Level that was broken: resistance for BUY, support for SELL
    pub level: Option<f64>,
    /// How far past `level` the close landed, in pips
    pub pip_distance: Option<f64>,
}

/// Classifies the last bar of `series` against its trailing support/resistance.
///
/// - BUY when the close is above resistance by at least `pip_threshold` pips.
/// - SELL when the close is below support by at least `pip_threshold` pips.
/// - NONE otherwise, and always when the series is shorter than the window.
///
/// Only the trailing `window` bars influence the result.
pub fn classify_breakout(series: &Series, config: &AnalysisConfig) -> Result<BreakoutReading> {
    config.validate()?;

    let index = series.last_index();
    let close = series.last().close;
    let levels = levels_at(series, config.window, index)?;

    let mut reading = BreakoutReading {
        classification: Classification::None,
        index,
        trigger_price: close,
        support: levels.support,
        resistance: levels.resistance,
        level: None,
        pip_distance: None,
    };

    let (Some(support), Some(resistance)) = (levels.support, levels.resistance) else {
        if DEBUG_FLAGS.print_breakout_checks {
            log::debug!(
                "Breakout check skipped: {} bars < window {}",
                series.len(),
                config.window
            );
        }
        return Ok(reading);
    };

    // Mutually exclusive since support <= resistance
    if close > resistance {
        let distance = price_to_pips(close - resistance);
        if distance >= config.pip_threshold {
            reading.classification = Classification::Buy;
            reading.level = Some(resistance);
            reading.pip_distance = Some(distance);
        }
    } else if close < support {
        let distance = price_to_pips(support - close);
        if distance >= config.pip_threshold {
            reading.classification = Classification::Sell;
            reading.level = Some(support);
            reading.pip_distance = Some(distance);
        }
    }

    if DEBUG_FLAGS.print_breakout_checks {
        log::debug!(
            "Breakout check [{}]: close {:.5} support {:.5} resistance {:.5} threshold {} -> {}",
            index,
            close,
            support,
            resistance,
            config.pip_threshold,
            reading.classification
        );
    }

    Ok(reading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bar, ForexPair};
    use crate::error::AnalysisError;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn config(window: usize, pips: f64) -> AnalysisConfig {
        AnalysisConfig::new(ForexPair::EurUsd, window, pips)
    }

    fn series_from(bars: &[(f64, f64, f64)]) -> Series {
        Series::new(bars.iter().map(|&(c, h, l)| Bar::new(c, h, l)).collect()).unwrap()
    }

    // Closes [1.1000, 1.1005, 1.1050, 1.1120]; the last bar's range stays inside the
    // previous band so its close clears the window high.
    fn rally_series() -> Series {
        series_from(&[
            (1.1000, 1.1005, 1.0995),
            (1.1005, 1.1010, 1.1000),
            (1.1050, 1.1055, 1.1045),
            (1.1120, 1.1050, 1.1040),
        ])
    }

    #[test]
    fn buy_when_close_clears_resistance_by_threshold() {
        let reading = classify_breakout(&rally_series(), &config(2, 20.0)).unwrap();
        assert_eq!(reading.classification, Classification::Buy);
        assert_eq!(reading.index, 3);
        assert_eq!(reading.trigger_price, 1.1120);
        assert_eq!(reading.resistance, Some(1.1055));
        assert_eq!(reading.level, Some(1.1055));
        assert!(approx_eq(reading.pip_distance.unwrap(), 65.0));
    }

    #[test]
    fn sell_when_close_drops_below_support_by_threshold() {
        let series = series_from(&[
            (1.1000, 1.1005, 1.0995),
            (1.0990, 1.0996, 1.0985),
            (1.0940, 1.0999, 1.0990),
        ]);
        let reading = classify_breakout(&series, &config(3, 30.0)).unwrap();
        assert_eq!(reading.classification, Classification::Sell);
        assert_eq!(reading.support, Some(1.0985));
        assert_eq!(reading.level, Some(1.0985));
        assert!(approx_eq(reading.pip_distance.unwrap(), 45.0));
    }

    #[test]
    fn threshold_is_inclusive() {
        let series = series_from(&[(1.1000, 1.1000, 1.0990), (1.1025, 1.1000, 1.0990)]);
        // Close sits 25 pips above resistance; 1.1025 - 1.1000 is not exact in binary,
        // so test against the computed distance itself.
        let distance = price_to_pips(1.1025 - 1.1000);
        let at = classify_breakout(&series, &config(2, distance)).unwrap();
        assert_eq!(at.classification, Classification::Buy);

        let above = classify_breakout(&series, &config(2, distance + 1e-6)).unwrap();
        assert_eq!(above.classification, Classification::None);
    }

    #[test]
    fn threshold_is_inclusive_below_support() {
        let series = series_from(&[(1.1000, 1.1010, 1.1000), (1.0975, 1.1010, 1.1000)]);
        let distance = price_to_pips(1.1000 - 1.0975);
        let at = classify_breakout(&series, &config(2, distance)).unwrap();
        assert_eq!(at.classification, Classification::Sell);
        assert_eq!(at.level, Some(1.1000));
        assert_eq!(at.pip_distance, Some(distance));

        let above = classify_breakout(&series, &config(2, distance + 1e-6)).unwrap();
        assert_eq!(above.classification, Classification::None);
    }

    #[test]
    fn small_break_is_not_a_signal() {
        let reading = classify_breakout(&rally_series(), &config(2, 80.0)).unwrap();
        assert_eq!(reading.classification, Classification::None);
        assert_eq!(reading.level, None);
        assert_eq!(reading.pip_distance, None);
        // Levels are still reported for display
        assert_eq!(reading.resistance, Some(1.1055));
    }

    #[test]
    fn series_shorter_than_window_forces_none() {
        let reading = classify_breakout(&rally_series(), &config(10, 1.0)).unwrap();
        assert_eq!(reading.classification, Classification::None);
        assert_eq!(reading.support, None);
        assert_eq!(reading.resistance, None);
    }

    #[test]
    fn close_inside_band_is_none() {
        let series = series_from(&[
            (1.1000, 1.1010, 1.0990),
            (1.1002, 1.1008, 1.0995),
            (1.1004, 1.1009, 1.0998),
        ]);
        let reading = classify_breakout(&series, &config(3, 0.0)).unwrap();
        assert_eq!(reading.classification, Classification::None);
    }

    #[test]
    fn history_before_window_does_not_leak() {
        let base = rally_series();
        let mut bars = vec![
            Bar::new(1.5000, 1.6000, 1.4000),
            Bar::new(0.9000, 0.9100, 0.8000),
        ];
        bars.extend_from_slice(base.bars());
        let extended = Series::new(bars).unwrap();

        let cfg = config(2, 20.0);
        let a = classify_breakout(&base, &cfg).unwrap();
        let b = classify_breakout(&extended, &cfg).unwrap();
        assert_eq!(a.classification, b.classification);
        assert_eq!(a.level, b.level);
        assert_eq!(a.pip_distance, b.pip_distance);
    }

    #[test]
    fn repeated_evaluation_is_identical() {
        let series = rally_series();
        let cfg = config(2, 20.0);
        assert_eq!(
            classify_breakout(&series, &cfg).unwrap(),
            classify_breakout(&series, &cfg).unwrap()
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert_eq!(
            classify_breakout(&rally_series(), &config(0, 20.0)),
            Err(AnalysisError::InvalidWindow(0))
        );
        assert_eq!(
            classify_breakout(&rally_series(), &config(2, -1.0)),
            Err(AnalysisError::InvalidThreshold(-1.0))
        );
    }

    #[test]
    fn never_both_buy_and_sell() {
        let series = rally_series();
        for window in 1..=4 {
            for pips in [0.0, 5.0, 20.0, 65.0, 100.0] {
                let reading = classify_breakout(&series, &config(window, pips)).unwrap();
                match reading.classification {
                    Classification::Buy => assert_eq!(reading.level, reading.resistance),
                    Classification::Sell => assert_eq!(reading.level, reading.support),
                    Classification::None => assert_eq!(reading.level, None),
                }
            }
        }
    }
}
