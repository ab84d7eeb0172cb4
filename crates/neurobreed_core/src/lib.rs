//! # Neurobreed Core
//!
//! Feedforward networks that evolve through genetic crossover and mutation
//! instead of gradient descent.
//!
//! This crate contains:
//! - Neurons, layers and networks with strict dimensional checks
//! - Concurrent per-neuron evaluation and breeding (rayon fan-out with a join)
//! - Pluggable activation, gene-creation and breeding strategies
//! - TOML configuration with named strategy presets
//!
//! Breeding never mutates a parent; it always returns a new structure.
//!
//! ## Example
//!
//! ```
//! use neurobreed_core::config::StrategyConfig;
//! use neurobreed_core::Network;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let strategies = StrategyConfig::default().build();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let parent = Network::new_random_with_rng(3, &[4, 3], &strategies, &mut rng);
//! let partner = Network::new_random_with_rng(3, &[4, 3], &strategies, &mut rng);
//!
//! let child = parent.breed_with_rng(&partner, &mut rng).unwrap();
//! let outputs = child.evaluate(&[0.57735, 0.57735, 0.57735]).unwrap();
//! assert_eq!(outputs.len(), 3);
//! ```

/// Topology and strategy configuration
pub mod config;
/// The dimension mismatch error
pub mod error;
/// Concrete activators, gene creators and breeders
pub mod genetics;
/// Neuron layers with concurrent evaluation and breeding
pub mod layer;
/// Output scoring and logging setup
pub mod metrics;
/// Layer pipelines
pub mod network;
/// Single neurons
pub mod neuron;
/// Strategy traits and the shared strategy bundle
pub mod strategy;

pub use error::{NetworkError, Result};
pub use layer::Layer;
pub use metrics::{init_logging, output_error};
pub use network::{FeedForward, Network};
pub use neuron::Neuron;
pub use strategy::{Activator, GeneCreator, NeuronBreeder, Strategies, WeightedSum};
