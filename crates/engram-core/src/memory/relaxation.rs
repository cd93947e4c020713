//! Relaxation dynamics: iterate a state to a fixed point under the stored
//! associations.

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::NetworkConfig;
use crate::error::{EngramError, EngramResult};
use crate::pattern::{Encoding, Pattern};

use super::weights::WeightStore;

/// Result of a completed recall, with telemetry.
#[derive(Debug, Clone, Serialize)]
pub struct RecallOutcome {
    /// The settled pattern.
    pub pattern: Pattern,
    /// Sweeps executed, counting the final no-change sweep that proved the
    /// fixed point.
    pub sweeps: usize,
    /// Energy of the settled pattern.
    pub energy: i64,
    /// Energy after initialization and after each sweep. Non-increasing
    /// sweep over sweep.
    pub energy_trace: Vec<i64>,
}

/// Drives a query state to a stable fixed point.
///
/// Reads the weight store, never mutates it. Each recall works on its own
/// copy of the caller's pattern.
#[derive(Debug)]
pub struct RelaxationEngine<'a> {
    store: &'a WeightStore,
    encoding: Encoding,
    max_sweeps: usize,
}

impl<'a> RelaxationEngine<'a> {
    /// Borrow the store for the duration of one or more recalls.
    pub fn new(store: &'a WeightStore, config: &NetworkConfig) -> Self {
        Self {
            store,
            encoding: config.encoding,
            max_sweeps: config.max_sweeps,
        }
    }

    /// Relax a copy of `input` until a full sweep produces no change.
    ///
    /// Sweeps visit neurons in row-major order and write each new value
    /// back immediately, so later neurons in a sweep see earlier neurons'
    /// updated values. That in-order write-back keeps the energy
    /// non-increasing neuron by neuron and makes the outcome
    /// deterministic for a given input.
    ///
    /// Termination of the sweep loop is not guaranteed in general, so the
    /// configured sweep cap bounds the loop; hitting it surfaces
    /// [`EngramError::NonConvergence`] carrying the best-effort state
    /// instead of silently truncating.
    pub fn settle(&self, input: &Pattern) -> EngramResult<RecallOutcome> {
        let mut state = input.clone();
        let mut energy_trace = vec![hopfield_energy(self.store, &state)];

        for sweep in 1..=self.max_sweeps {
            let changed = self.sweep(&mut state);
            let energy = hopfield_energy(self.store, &state);
            energy_trace.push(energy);
            debug!(sweep, changed, energy, "relaxation sweep");

            if changed == 0 {
                return Ok(RecallOutcome {
                    pattern: state,
                    sweeps: sweep,
                    energy,
                    energy_trace,
                });
            }
        }

        warn!(
            max_sweeps = self.max_sweeps,
            "relaxation hit the sweep cap before settling"
        );
        Err(EngramError::NonConvergence {
            sweeps: self.max_sweeps,
            last: state,
        })
    }

    /// One full synchronous-looking sweep with immediate write-back.
    /// Returns how many cells changed.
    fn sweep(&self, state: &mut Pattern) -> usize {
        let cells = state.as_mut_slice();
        let mut changed = 0;
        for a in 0..self.store.neuron_count() {
            let row = self.store.row(a);
            let mut net: i64 = 0;
            // The diagonal weight is 0, so the self term contributes
            // nothing and the sum can run over the whole row.
            for (b, &w) in row.iter().enumerate() {
                net += w as i64 * cells[b] as i64;
            }
            let new_value = self.encoding.activate(net);
            if new_value != cells[a] {
                cells[a] = new_value;
                changed += 1;
            }
        }
        changed
    }
}

/// Hopfield energy of a state under the stored weights.
///
/// The classical form is `-1/2 * sum over all (x, y) of w[x][y]*s[x]*s[y]`;
/// with a symmetric zero-diagonal matrix that equals the sum over x < y
/// without the halving, which keeps the arithmetic in exact integers.
pub(crate) fn hopfield_energy(store: &WeightStore, state: &Pattern) -> i64 {
    let cells = state.as_slice();
    let mut energy: i64 = 0;
    for a in 0..store.neuron_count() {
        let row = store.row(a);
        for b in (a + 1)..store.neuron_count() {
            energy -= row[b] as i64 * cells[a] as i64 * cells[b] as i64;
        }
    }
    energy
}
