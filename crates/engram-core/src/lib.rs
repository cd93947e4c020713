//! Engram Core Library
//!
//! A discrete associative-memory network (Hopfield-style): patterns are
//! stored in a dense integer weight matrix via the Hebbian outer-product
//! rule and reconstructed from noisy or partial queries by iterative
//! relaxation to a fixed point.
//!
//! # Architecture
//!
//! This crate defines:
//! - Pattern grids and cell encodings ([`Pattern`], [`Encoding`])
//! - The associative memory service ([`Network`], [`WeightStore`],
//!   [`RelaxationEngine`])
//! - Error types and result alias ([`EngramError`], [`EngramResult`])
//! - Configuration structures ([`Config`], [`NetworkConfig`])
//!
//! # Example
//!
//! ```
//! use engram_core::{Encoding, Network, Pattern};
//!
//! let stored = Pattern::parse("##\n.#", Encoding::Bipolar).unwrap();
//! let mut network = Network::new(2).unwrap();
//! network.train(&stored).unwrap();
//!
//! let recalled = network.recall(&stored).unwrap();
//! assert_eq!(recalled, stored);
//! ```

pub mod config;
pub mod error;
pub mod memory;
pub mod pattern;

// Re-exports for convenience
pub use config::{Config, LoggingConfig, NetworkConfig};
pub use error::{EngramError, EngramResult};
pub use memory::{Network, RecallOutcome, RelaxationEngine, WeightStore};
pub use pattern::{Encoding, Pattern};
