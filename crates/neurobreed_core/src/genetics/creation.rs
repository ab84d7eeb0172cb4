use crate::strategy::GeneCreator;
use rand::{Rng, RngCore};
use rand_distr::StandardNormal;

/// Uniform gene in [-1, 1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardGeneCreator;

impl GeneCreator for StandardGeneCreator {
    fn create_gene(&self, rng: &mut dyn RngCore) -> f64 {
        2.0 * rng.gen::<f64>() - 1.0
    }
}

/// Standard normal gene: mean 0, standard deviation 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormallyDistributedGeneCreator;

impl GeneCreator for NormallyDistributedGeneCreator {
    fn create_gene(&self, rng: &mut dyn RngCore) -> f64 {
        rng.sample(StandardNormal)
    }
}

/// Always yields the same gene. Consumes no randomness.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConstantGeneCreator(pub f64);

impl GeneCreator for ConstantGeneCreator {
    fn create_gene(&self, _rng: &mut dyn RngCore) -> f64 {
        self.0
    }
}
