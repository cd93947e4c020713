//! Error types for engram-core.

use thiserror::Error;

use crate::pattern::{Encoding, Pattern};

/// Top-level error type for engram-core.
#[derive(Debug, Error)]
pub enum EngramError {
    #[error("Network size must be greater than 0, got {size}")]
    InvalidSize { size: usize },

    #[error("Pattern dimension mismatch: network is {expected}x{expected}, pattern is {actual}x{actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Ragged pattern: row {row} has {actual} cells, expected {expected}")]
    RaggedPattern {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Cell ({row}, {col}) holds {value}, outside the {encoding} domain")]
    InvalidCell {
        row: usize,
        col: usize,
        value: i8,
        encoding: Encoding,
    },

    #[error("Unrecognized glyph '{glyph}' at row {row}, column {col}")]
    InvalidGlyph { row: usize, col: usize, glyph: char },

    #[error("Relaxation exceeded {sweeps} sweeps without reaching a fixed point")]
    NonConvergence {
        sweeps: usize,
        /// Best-effort state at the moment the sweep cap was hit.
        last: Pattern,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for EngramError {
    fn from(err: config::ConfigError) -> Self {
        EngramError::Config(err.to_string())
    }
}

/// Result type alias for engram-core operations.
pub type EngramResult<T> = Result<T, EngramError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = EngramError::DimensionMismatch {
            expected: 10,
            actual: 9,
        };
        assert!(err.to_string().contains("10x10"));
        assert!(err.to_string().contains("9x9"));
    }

    #[test]
    fn test_invalid_cell_display() {
        let err = EngramError::InvalidCell {
            row: 2,
            col: 7,
            value: 3,
            encoding: Encoding::Bipolar,
        };
        let msg = err.to_string();
        assert!(msg.contains("(2, 7)"));
        assert!(msg.contains("bipolar"));
    }

    #[test]
    fn test_non_convergence_carries_last_state() {
        let last = Pattern::filled(2, 1).unwrap();
        let err = EngramError::NonConvergence { sweeps: 5, last };
        assert!(err.to_string().contains("5 sweeps"));
        match err {
            EngramError::NonConvergence { last, .. } => assert_eq!(last.size(), 2),
            _ => unreachable!(),
        }
    }
}
