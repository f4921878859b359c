use std::error::Error;
use std::fmt;

/// Configuration errors, raised before any algorithm runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Element count outside `[min, max]`.
    InvalidElementCount { got: usize, min: usize, max: usize },

    /// Selector that names no algorithm.
    UnknownAlgorithm(String),

    /// The same value occurs twice in the input.
    DuplicateValue(u32),
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::InvalidElementCount { got, min, max } => {
                write!(f, "Invalid number of elements: {got} (expected {min}..={max})")
            }
            SortError::UnknownAlgorithm(name) => write!(f, "Unknown sorting method: {name:?}"),
            SortError::DuplicateValue(value) => write!(f, "Duplicate value in input: {value}"),
        }
    }
}

impl Error for SortError {}

/// Returned through every frame boundary once a stop was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("sort cancelled")
    }
}

impl Error for Cancelled {}

pub type Step = Result<(), Cancelled>;
