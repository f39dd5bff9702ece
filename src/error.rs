use thiserror::Error;

use crate::domain::bar::BarField;

/// Rejections raised by the core when handed input it must not coerce.
///
/// Missing data (a series shorter than the window, an empty headline batch) is
/// never an error: it surfaces as absent levels, `Classification::None` or
/// `AggregateSentiment::NoData`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Series contains no bars")]
    EmptySeries,

    #[error("Bar {index}: {field} price {value} is not a finite positive number")]
    InvalidPrice {
        index: usize,
        field: BarField,
        value: f64,
    },

    #[error("Bar {index}: high {high} is below low {low}")]
    InvertedBar { index: usize, high: f64, low: f64 },

    #[error("Series columns differ in length (close {close}, high {high}, low {low})")]
    ColumnLengthMismatch {
        close: usize,
        high: usize,
        low: usize,
    },

    #[error("Window size must be a positive integer, got {0}")]
    InvalidWindow(usize),

    #[error("Pip threshold must be a finite non-negative number, got {0}")]
    InvalidThreshold(f64),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
