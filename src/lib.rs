//! Genetically bred feedforward networks.
//!
//! Re-exports [`neurobreed_core`] and adds the [`demo`] runner used by the
//! `neurobreed` binary.

pub mod demo;

pub use neurobreed_core::*;
