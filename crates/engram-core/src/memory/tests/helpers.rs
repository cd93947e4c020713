//! Shared fixtures for memory service tests.

use crate::memory::Network;
use crate::pattern::{Encoding, Pattern};

/// The 10x10 digit-zero glyph used throughout the recall scenarios.
pub const DIGIT_ZERO: &str = "\
    #####.####\n\
    #....#...#\n\
    #....#...#\n\
    #....#...#\n\
    #####.####\n\
    .....#...#\n\
    .....#...#\n\
    #....#...#\n\
    #....#...#\n\
    #####.####";

pub fn digit_zero(encoding: Encoding) -> Pattern {
    Pattern::parse(DIGIT_ZERO, encoding).expect("digit glyph must parse")
}

/// Alternating hi/lo cells, a second near-orthogonal memory.
pub fn checkerboard(size: usize, encoding: Encoding) -> Pattern {
    let rows: Vec<Vec<i8>> = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    if (row + col) % 2 == 0 {
                        encoding.hi()
                    } else {
                        encoding.lo()
                    }
                })
                .collect()
        })
        .collect();
    Pattern::from_rows(&rows).expect("checkerboard must build")
}

/// Copy of `pattern` with the given cells inverted.
pub fn corrupted(pattern: &Pattern, encoding: Encoding, cells: &[(usize, usize)]) -> Pattern {
    let mut noisy = pattern.clone();
    for &(row, col) in cells {
        noisy.set(row, col, encoding.invert(noisy.get(row, col)));
    }
    noisy
}

/// Every weight in the store, for before/after comparisons.
pub fn weight_snapshot(network: &Network) -> Vec<i32> {
    let size = network.size();
    let mut snapshot = Vec::with_capacity(size * size * size * size);
    for i in 0..size {
        for j in 0..size {
            for k in 0..size {
                for l in 0..size {
                    snapshot.push(network.weights().weight((i, j), (k, l)));
                }
            }
        }
    }
    snapshot
}
