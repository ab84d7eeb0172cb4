use crate::neuron::Neuron;
use crate::strategy::{GeneCreator, NeuronBreeder};
use rand::{Rng, RngCore};
use rand_distr::StandardNormal;
use std::fmt;
use std::sync::Arc;

/// Where a single child gene comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneSource {
    /// A freshly created gene (mutation).
    Fresh,
    ParentA,
    ParentB,
}

impl GeneSource {
    /// Draws `r` uniform in [0, 1) and splits it three ways:
    /// `r < p` is a mutation, `r < p/2 + 0.5` keeps parent A, anything else
    /// takes parent B.
    pub fn choose(mutation_rate: f64, rng: &mut dyn RngCore) -> Self {
        let choice: f64 = rng.gen();
        if choice < mutation_rate {
            Self::Fresh
        } else if choice < (mutation_rate / 2.0) + 0.5 {
            Self::ParentA
        } else {
            Self::ParentB
        }
    }
}

/// Crossover with mutation where every inherited gene is perturbed by
/// Gaussian noise of mean 0 and standard deviation `std_dev`.
#[derive(Clone)]
pub struct GaussianBreeder {
    mutation_rate: f64,
    std_dev: f64,
    creator: Arc<dyn GeneCreator>,
}

impl GaussianBreeder {
    pub fn new(mutation_rate: f64, std_dev: f64, creator: Arc<dyn GeneCreator>) -> Self {
        Self {
            mutation_rate,
            std_dev,
            creator,
        }
    }

    fn noise(&self, rng: &mut dyn RngCore) -> f64 {
        let sample: f64 = rng.sample(StandardNormal);
        sample * self.std_dev
    }
}

impl NeuronBreeder for GaussianBreeder {
    fn breed(&self, parent_a: &Neuron, parent_b: &Neuron, rng: &mut dyn RngCore) -> Neuron {
        let genes = parent_a
            .genes()
            .iter()
            .zip(parent_b.genes())
            .map(|(&a, &b)| match GeneSource::choose(self.mutation_rate, rng) {
                GeneSource::Fresh => self.creator.create_gene(rng),
                GeneSource::ParentA => a + self.noise(rng),
                GeneSource::ParentB => b + self.noise(rng),
            })
            .collect();
        parent_a.create_new(genes)
    }
}

impl fmt::Debug for GaussianBreeder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaussianBreeder")
            .field("mutation_rate", &self.mutation_rate)
            .field("std_dev", &self.std_dev)
            .finish_non_exhaustive()
    }
}

/// Crossover with mutation where inherited genes are copied verbatim.
#[derive(Clone)]
pub struct NormalBreeder {
    mutation_rate: f64,
    creator: Arc<dyn GeneCreator>,
}

impl NormalBreeder {
    pub fn new(mutation_rate: f64, creator: Arc<dyn GeneCreator>) -> Self {
        Self {
            mutation_rate,
            creator,
        }
    }
}

impl NeuronBreeder for NormalBreeder {
    fn breed(&self, parent_a: &Neuron, parent_b: &Neuron, rng: &mut dyn RngCore) -> Neuron {
        let genes = parent_a
            .genes()
            .iter()
            .zip(parent_b.genes())
            .map(|(&a, &b)| match GeneSource::choose(self.mutation_rate, rng) {
                GeneSource::Fresh => self.creator.create_gene(rng),
                GeneSource::ParentA => a,
                GeneSource::ParentB => b,
            })
            .collect();
        parent_a.create_new(genes)
    }
}

impl fmt::Debug for NormalBreeder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalBreeder")
            .field("mutation_rate", &self.mutation_rate)
            .finish_non_exhaustive()
    }
}
