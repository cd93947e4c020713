//! Associative memory: Hebbian storage and relaxation recall.
//!
//! Two components, tightly coupled around a shared weight matrix:
//!
//! 1. **WeightStore**: owns the N^2 x N^2 association matrix over the
//!    flattened neuron grid and accumulates each trained pattern's
//!    outer-product contribution.
//! 2. **RelaxationEngine**: given a query state, repeatedly computes each
//!    neuron's weighted input and applies a hard threshold until a full
//!    sweep produces no change.
//!
//! The [`Network`] facade ties them together behind a validated public
//! surface: callers train one or more full-size patterns, then recall a
//! noisy or partial query and get back the settled pattern.
//!
//! # Fail-Fast Behavior
//!
//! All operations validate their input before touching network state:
//! a pattern with the wrong dimensions or an out-of-domain cell is
//! rejected with no partial mutation.
//!
//! # Module Structure
//!
//! - `weights`: flat-indexed Hebbian weight matrix
//! - `relaxation`: sweep loop, energy, recall outcome report
//! - `network`: public facade and input validation

pub mod network;
pub mod relaxation;
pub mod weights;

#[cfg(test)]
mod tests;

pub use network::Network;
pub use relaxation::{RecallOutcome, RelaxationEngine};
pub use weights::WeightStore;
