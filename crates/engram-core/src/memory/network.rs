//! Network facade: validated train/recall over the weight store.

use tracing::debug;

use crate::config::NetworkConfig;
use crate::error::{EngramError, EngramResult};
use crate::pattern::Pattern;

use super::relaxation::{hopfield_energy, RecallOutcome, RelaxationEngine};
use super::weights::WeightStore;

/// A discrete associative-memory network over an N x N neuron grid.
///
/// The network owns the single mutable weight matrix. `train` is the only
/// operation that mutates it (`&mut self`); `recall` and `energy` read it
/// (`&self`). Callers that share a network across threads must serialize
/// all trainings before recalls, which the borrow rules already enforce
/// within safe Rust.
#[derive(Debug)]
pub struct Network {
    config: NetworkConfig,
    store: WeightStore,
}

impl Network {
    /// Construct a network with default configuration.
    pub fn new(size: usize) -> EngramResult<Self> {
        Self::with_config(size, NetworkConfig::default())
    }

    /// Construct a network with custom configuration.
    pub fn with_config(size: usize, config: NetworkConfig) -> EngramResult<Self> {
        config.validate()?;
        if size == 0 {
            return Err(EngramError::InvalidSize { size });
        }
        Ok(Self {
            config,
            store: WeightStore::new(size),
        })
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.store.size()
    }

    /// The active configuration.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Read access to the weight store.
    pub fn weights(&self) -> &WeightStore {
        &self.store
    }

    /// Store a pattern by folding its Hebbian contribution into the
    /// weight matrix.
    ///
    /// Validation precedes any mutation: a rejected pattern leaves the
    /// matrix untouched. Training is additive, not idempotent: storing
    /// the same pattern twice doubles its contribution.
    pub fn train(&mut self, pattern: &Pattern) -> EngramResult<()> {
        self.validate_pattern(pattern)?;
        self.store.accumulate(pattern);
        debug!(size = self.size(), "pattern folded into weight matrix");
        Ok(())
    }

    /// Reconstruct the stored pattern closest to `input`.
    ///
    /// The caller's pattern is never mutated; relaxation runs on a copy.
    pub fn recall(&self, input: &Pattern) -> EngramResult<Pattern> {
        Ok(self.recall_outcome(input)?.pattern)
    }

    /// Like [`Network::recall`], but returns the full outcome report
    /// (sweep count and energy trace) alongside the settled pattern.
    pub fn recall_outcome(&self, input: &Pattern) -> EngramResult<RecallOutcome> {
        self.validate_pattern(input)?;
        RelaxationEngine::new(&self.store, &self.config).settle(input)
    }

    /// Hopfield energy of a state under the current weights.
    pub fn energy(&self, state: &Pattern) -> EngramResult<i64> {
        self.validate_pattern(state)?;
        Ok(hopfield_energy(&self.store, state))
    }

    /// Check dimensions and cell domain against the configured network.
    fn validate_pattern(&self, pattern: &Pattern) -> EngramResult<()> {
        if pattern.size() != self.size() {
            return Err(EngramError::DimensionMismatch {
                expected: self.size(),
                actual: pattern.size(),
            });
        }
        let encoding = self.config.encoding;
        for row in 0..pattern.size() {
            for col in 0..pattern.size() {
                let value = pattern.get(row, col);
                if !encoding.contains(value) {
                    return Err(EngramError::InvalidCell {
                        row,
                        col,
                        value,
                        encoding,
                    });
                }
            }
        }
        Ok(())
    }
}
