use crate::error::{ensure_len, NetworkError, Result};
use crate::neuron::Neuron;
use crate::strategy::Strategies;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::sync::Arc;

/// An ordered set of neurons sharing one input dimension.
///
/// Evaluation and breeding fan out one rayon task per neuron and join before
/// returning, so results always come back in neuron order.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    input_size: usize,
}

impl Layer {
    /// Builds `output_size` fresh neurons, each taking `input_size` inputs.
    pub fn new_random_with_rng<R: Rng>(
        output_size: usize,
        input_size: usize,
        strategies: &Arc<Strategies>,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..output_size)
            .map(|_| Neuron::new_random_with_rng(input_size, strategies, rng))
            .collect();
        Self {
            neurons,
            input_size,
        }
    }

    /// Assembles a layer from existing neurons, which must all take `input_size` inputs.
    pub fn from_neurons(input_size: usize, neurons: Vec<Neuron>) -> Result<Self> {
        for neuron in &neurons {
            ensure_len(input_size, neuron.size())?;
        }
        Ok(Self {
            neurons,
            input_size,
        })
    }

    /// Computes every neuron's output for the same input vector.
    ///
    /// All tasks run to completion before the first failure (by neuron index)
    /// is reported. Layers built through `from_neurons` or breeding always
    /// hold neurons of `input_size` genes, so only the length check above
    /// can fail in practice.
    pub fn evaluate(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        ensure_len(self.input_size, inputs.len())?;
        let outputs: Vec<Result<f64>> = self
            .neurons
            .par_iter()
            .map(|neuron| neuron.process(inputs))
            .collect();
        tracing::trace!(
            input_size = self.input_size,
            output_size = self.output_size(),
            "Layer evaluated"
        );
        outputs.into_iter().collect()
    }

    /// Breeds neuron `i` with the partner's neuron `i` for every index.
    ///
    /// One seed per neuron is drawn from `rng` up front; each task then owns
    /// its own stream, so the child depends only on the seed of `rng`.
    pub fn breed_with_rng<R: Rng>(&self, partner: &Layer, rng: &mut R) -> Result<Layer> {
        self.ensure_same_shape(partner)?;
        let seeds: Vec<u64> = (0..self.neurons.len()).map(|_| rng.gen()).collect();
        let children: Vec<Result<Neuron>> = self
            .neurons
            .par_iter()
            .zip(partner.neurons.par_iter())
            .zip(seeds.par_iter())
            .map(|((neuron, mate), &seed)| {
                let mut task_rng = ChaCha8Rng::seed_from_u64(seed);
                neuron.breed_with_rng(mate, &mut task_rng)
            })
            .collect();
        let neurons = children.into_iter().collect::<Result<Vec<_>>>()?;
        Ok(Layer {
            neurons,
            input_size: self.input_size,
        })
    }

    pub fn breed(&self, partner: &Layer) -> Result<Layer> {
        let mut rng = rand::thread_rng();
        self.breed_with_rng(partner, &mut rng)
    }

    pub(crate) fn ensure_same_shape(&self, partner: &Layer) -> Result<()> {
        if self.input_size != partner.input_size {
            return Err(NetworkError::mismatch(self.input_size, partner.input_size));
        }
        ensure_len(self.output_size(), partner.output_size())
    }

    #[must_use]
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    #[must_use]
    pub fn output_size(&self) -> usize {
        self.neurons.len()
    }

    #[must_use]
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}
