use crate::error::{ensure_len, Result};
use crate::strategy::Strategies;
use rand::Rng;
use std::sync::Arc;

/// A weight vector plus a shared reference to the network's strategies.
///
/// The gene count is the neuron's input dimension. Neurons are immutable
/// values: breeding always produces a new neuron.
#[derive(Debug, Clone)]
pub struct Neuron {
    genes: Vec<f64>,
    strategies: Arc<Strategies>,
}

impl Neuron {
    /// Creates a neuron of `size` inputs, calling the gene creator once per slot.
    pub fn new_random_with_rng<R: Rng>(
        size: usize,
        strategies: &Arc<Strategies>,
        rng: &mut R,
    ) -> Self {
        let genes = (0..size).map(|_| strategies.create_gene(rng)).collect();
        Self {
            genes,
            strategies: Arc::clone(strategies),
        }
    }

    /// Creates a neuron from an explicit gene set.
    #[must_use]
    pub fn with_genes(genes: Vec<f64>, strategies: Arc<Strategies>) -> Self {
        Self { genes, strategies }
    }

    /// Creates a sibling neuron with `genes` that shares this neuron's strategies.
    #[must_use]
    pub fn create_new(&self, genes: Vec<f64>) -> Self {
        Self::with_genes(genes, Arc::clone(&self.strategies))
    }

    /// Weighted sum of `inputs`, activated.
    pub fn process(&self, inputs: &[f64]) -> Result<f64> {
        ensure_len(self.size(), inputs.len())?;
        let sum: f64 = self
            .genes
            .iter()
            .zip(inputs)
            .map(|(gene, input)| gene * input)
            .sum();
        Ok(self.strategies.activate(sum, self.size()))
    }

    /// Breeds with `partner` through the shared breeder. Neither parent changes.
    ///
    /// The child must keep the parents' gene count.
    pub fn breed_with_rng<R: Rng>(&self, partner: &Neuron, rng: &mut R) -> Result<Neuron> {
        ensure_len(self.size(), partner.size())?;
        let child = self.strategies.breeder().breed(self, partner, rng);
        ensure_len(self.size(), child.size())?;
        Ok(child)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.genes.len()
    }

    #[must_use]
    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    /// The nth gene, if present.
    #[must_use]
    pub fn gene(&self, n: usize) -> Option<f64> {
        self.genes.get(n).copied()
    }

    #[must_use]
    pub fn strategies(&self) -> &Arc<Strategies> {
        &self.strategies
    }
}
