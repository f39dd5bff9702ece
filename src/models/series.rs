use serde::{Deserialize, Serialize};

use crate::domain::Bar;
use crate::error::{AnalysisError, Result};

// ============================================================================
// Series: validated, chronologically ordered bars
// ============================================================================

/// Non-empty run of bars whose prices have all passed `Bar::validate`.
/// Order is chronological. Bars have no identity beyond their position.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "Vec<Bar>", into = "Vec<Bar>")]
pub struct Series {
    bars: Vec<Bar>,
}

impl Series {
    pub fn new(bars: Vec<Bar>) -> Result<Self> {
        if bars.is_empty() {
            return Err(AnalysisError::EmptySeries);
        }
        for (index, bar) in bars.iter().enumerate() {
            bar.validate(index)?;
        }
        Ok(Self { bars })
    }

    /// Build from parallel price columns, e.g. data arriving as separate close/high/low vectors.
    pub fn from_columns(close: &[f64], high: &[f64], low: &[f64]) -> Result<Self> {
        if close.len() != high.len() || close.len() != low.len() {
            return Err(AnalysisError::ColumnLengthMismatch {
                close: close.len(),
                high: high.len(),
                low: low.len(),
            });
        }
        let bars = close
            .iter()
            .zip(high)
            .zip(low)
            .map(|((&c, &h), &l)| Bar::new(c, h, l))
            .collect();
        Self::new(bars)
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    // Always false once constructed
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.bars.len() - 1
    }

    pub fn last(&self) -> &Bar {
        &self.bars[self.last_index()]
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// The most recent `count` bars (or all of them if fewer exist).
    pub fn tail(&self, count: usize) -> Result<Series> {
        let start = self.bars.len().saturating_sub(count);
        Series::new(self.bars[start..].to_vec())
    }
}

impl TryFrom<Vec<Bar>> for Series {
    type Error = AnalysisError;

    fn try_from(bars: Vec<Bar>) -> Result<Self> {
        Series::new(bars)
    }
}

impl From<Series> for Vec<Bar> {
    fn from(series: Series) -> Self {
        series.bars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bar::BarField;

    #[test]
    fn rejects_empty_series() {
        assert_eq!(Series::new(vec![]), Err(AnalysisError::EmptySeries));
    }

    #[test]
    fn reports_index_of_first_bad_bar() {
        let bars = vec![
            Bar::new(1.10, 1.11, 1.09),
            Bar::new(1.10, 1.11, 1.09),
            Bar::new(f64::NAN, 1.11, 1.09),
        ];
        assert!(matches!(
            Series::new(bars),
            Err(AnalysisError::InvalidPrice {
                index: 2,
                field: BarField::Close,
                ..
            })
        ));
    }

    #[test]
    fn from_columns_checks_lengths() {
        let result = Series::from_columns(&[1.1, 1.2], &[1.2, 1.3], &[1.0]);
        assert_eq!(
            result,
            Err(AnalysisError::ColumnLengthMismatch {
                close: 2,
                high: 2,
                low: 1
            })
        );
    }

    #[test]
    fn from_columns_keeps_order() {
        let series = Series::from_columns(&[1.1, 1.2], &[1.15, 1.25], &[1.05, 1.15]).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![1.1, 1.2]);
        assert_eq!(series.last().high, 1.25);
        assert_eq!(series.last_index(), 1);
    }

    #[test]
    fn tail_keeps_most_recent_bars() {
        let series =
            Series::from_columns(&[1.1, 1.2, 1.3], &[1.15, 1.25, 1.35], &[1.05, 1.15, 1.25])
                .unwrap();
        assert_eq!(series.tail(2).unwrap().closes(), vec![1.2, 1.3]);
        assert_eq!(series.tail(10).unwrap().len(), 3);
    }

    #[test]
    fn deserialization_revalidates() {
        let json = r#"[{"close":1.1,"high":1.0,"low":1.2}]"#;
        assert!(serde_json::from_str::<Series>(json).is_err());

        let json = r#"[{"close":1.1,"high":1.2,"low":1.0}]"#;
        let series: Series = serde_json::from_str(json).unwrap();
        assert_eq!(series.len(), 1);
    }
}
