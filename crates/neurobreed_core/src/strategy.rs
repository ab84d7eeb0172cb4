//! Pluggable behaviour shared by every neuron of a network.
//!
//! A [`Strategies`] bundle is built once, wrapped in an `Arc`, and handed to
//! every neuron by reference. Nothing in the bundle is mutated after
//! construction, so neurons can be evaluated and bred from many threads at
//! once.

use crate::neuron::Neuron;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Maps a weighted input sum to a bounded output.
pub trait Activator: Send + Sync {
    fn activate(&self, weighted_sum: f64) -> f64;
}

/// Produces a fresh gene value, drawing from the supplied randomness source.
pub trait GeneCreator: Send + Sync {
    fn create_gene(&self, rng: &mut dyn RngCore) -> f64;
}

/// Combines two equally sized parents into a new child neuron.
///
/// Implementations may assume both parents have the same gene count; the
/// length check happens in [`Neuron::breed_with_rng`] before delegation.
pub trait NeuronBreeder: Send + Sync {
    fn breed(&self, parent_a: &Neuron, parent_b: &Neuron, rng: &mut dyn RngCore) -> Neuron;
}

impl<F> Activator for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn activate(&self, weighted_sum: f64) -> f64 {
        self(weighted_sum)
    }
}

impl<F> GeneCreator for F
where
    F: Fn(&mut dyn RngCore) -> f64 + Send + Sync,
{
    fn create_gene(&self, rng: &mut dyn RngCore) -> f64 {
        self(rng)
    }
}

impl<F> NeuronBreeder for F
where
    F: Fn(&Neuron, &Neuron, &mut dyn RngCore) -> Neuron + Send + Sync,
{
    fn breed(&self, parent_a: &Neuron, parent_b: &Neuron, rng: &mut dyn RngCore) -> Neuron {
        self(parent_a, parent_b, rng)
    }
}

/// How the dot product of genes and inputs is scaled before activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightedSum {
    /// Activate the plain dot product.
    #[default]
    Raw,
    /// Divide the dot product by the neuron's input count first.
    Mean,
}

impl WeightedSum {
    #[must_use]
    pub fn apply(self, sum: f64, size: usize) -> f64 {
        match self {
            Self::Raw => sum,
            Self::Mean if size == 0 => sum,
            Self::Mean => sum / size as f64,
        }
    }
}

/// The {Activator, GeneCreator, NeuronBreeder} triple parametrizing a network.
#[derive(Clone)]
pub struct Strategies {
    activator: Arc<dyn Activator>,
    gene_creator: Arc<dyn GeneCreator>,
    breeder: Arc<dyn NeuronBreeder>,
    weighted_sum: WeightedSum,
}

impl Strategies {
    /// Creates a bundle from concrete strategy values.
    pub fn new(
        activator: impl Activator + 'static,
        gene_creator: impl GeneCreator + 'static,
        breeder: impl NeuronBreeder + 'static,
    ) -> Self {
        Self::from_parts(Arc::new(activator), Arc::new(gene_creator), Arc::new(breeder))
    }

    /// Creates a bundle from already shared strategies.
    ///
    /// Useful when a breeder and the bundle should draw fresh genes from the
    /// same creator.
    #[must_use]
    pub fn from_parts(
        activator: Arc<dyn Activator>,
        gene_creator: Arc<dyn GeneCreator>,
        breeder: Arc<dyn NeuronBreeder>,
    ) -> Self {
        Self {
            activator,
            gene_creator,
            breeder,
            weighted_sum: WeightedSum::default(),
        }
    }

    #[must_use]
    pub fn with_weighted_sum(mut self, weighted_sum: WeightedSum) -> Self {
        self.weighted_sum = weighted_sum;
        self
    }

    #[must_use]
    pub fn weighted_sum(&self) -> WeightedSum {
        self.weighted_sum
    }

    /// Scales `sum` according to the bundle's [`WeightedSum`] and activates it.
    #[must_use]
    pub fn activate(&self, sum: f64, size: usize) -> f64 {
        self.activator.activate(self.weighted_sum.apply(sum, size))
    }

    pub fn create_gene(&self, rng: &mut dyn RngCore) -> f64 {
        self.gene_creator.create_gene(rng)
    }

    pub fn breeder(&self) -> &dyn NeuronBreeder {
        self.breeder.as_ref()
    }
}

impl fmt::Debug for Strategies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strategies")
            .field("weighted_sum", &self.weighted_sum)
            .finish_non_exhaustive()
    }
}
