use crate::error::{ensure_len, Result};
use crate::layer::Layer;
use crate::strategy::Strategies;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::sync::Arc;

/// Anything that maps an input vector to an output vector: a layer, or a
/// whole pipeline of layers.
pub trait FeedForward {
    fn evaluate(&self, inputs: &[f64]) -> Result<Vec<f64>>;
    fn input_size(&self) -> usize;
    fn output_size(&self) -> usize;
}

impl FeedForward for Layer {
    fn evaluate(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        Layer::evaluate(self, inputs)
    }

    fn input_size(&self) -> usize {
        Layer::input_size(self)
    }

    fn output_size(&self) -> usize {
        Layer::output_size(self)
    }
}

impl FeedForward for Network {
    fn evaluate(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        Network::evaluate(self, inputs)
    }

    fn input_size(&self) -> usize {
        Network::input_size(self)
    }

    fn output_size(&self) -> usize {
        Network::output_size(self)
    }
}

/// An ordered pipeline of layers.
///
/// Layer `i + 1` takes exactly as many inputs as layer `i` produces, and the
/// first layer takes the network's inputs.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    input_size: usize,
}

impl Network {
    /// Builds layers left to right from `layer_sizes`, with fresh genes.
    pub fn new_random_with_rng<R: Rng>(
        number_of_inputs: usize,
        layer_sizes: &[usize],
        strategies: &Arc<Strategies>,
        rng: &mut R,
    ) -> Self {
        let mut previous_size = number_of_inputs;
        let mut layers = Vec::with_capacity(layer_sizes.len());
        for &size in layer_sizes {
            layers.push(Layer::new_random_with_rng(
                size,
                previous_size,
                strategies,
                rng,
            ));
            previous_size = size;
        }
        tracing::debug!(
            inputs = number_of_inputs,
            layers = ?layer_sizes,
            "Network constructed"
        );
        Self {
            layers,
            input_size: number_of_inputs,
        }
    }

    pub fn new(
        number_of_inputs: usize,
        layer_sizes: &[usize],
        strategies: &Arc<Strategies>,
    ) -> Self {
        let mut rng = rand::thread_rng();
        Self::new_random_with_rng(number_of_inputs, layer_sizes, strategies, &mut rng)
    }

    /// Assembles a network from existing layers, checking that they chain.
    pub fn from_layers(input_size: usize, layers: Vec<Layer>) -> Result<Self> {
        let mut previous_size = input_size;
        for layer in &layers {
            ensure_len(previous_size, layer.input_size())?;
            previous_size = layer.output_size();
        }
        Ok(Self { layers, input_size })
    }

    /// Pipes `inputs` through every layer in order.
    ///
    /// Layers run sequentially; neurons within a layer run concurrently. The
    /// first layer error is returned as is.
    pub fn evaluate(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        ensure_len(self.input_size, inputs.len())?;
        let mut signal = inputs.to_vec();
        for layer in &self.layers {
            signal = layer.evaluate(&signal)?;
        }
        Ok(signal)
    }

    /// Breeds layer `i` with the partner's layer `i`; layers breed concurrently.
    pub fn breed_with_rng<R: Rng>(&self, partner: &Network, rng: &mut R) -> Result<Network> {
        ensure_len(self.layers.len(), partner.layers.len())?;
        ensure_len(self.input_size, partner.input_size)?;
        for (layer, mate) in self.layers.iter().zip(&partner.layers) {
            layer.ensure_same_shape(mate)?;
        }

        let seeds: Vec<u64> = (0..self.layers.len()).map(|_| rng.gen()).collect();
        let children: Vec<Result<Layer>> = self
            .layers
            .par_iter()
            .zip(partner.layers.par_iter())
            .zip(seeds.par_iter())
            .map(|((layer, mate), &seed)| {
                let mut task_rng = ChaCha8Rng::seed_from_u64(seed);
                layer.breed_with_rng(mate, &mut task_rng)
            })
            .collect();
        let layers = children.into_iter().collect::<Result<Vec<_>>>()?;

        tracing::debug!(topology = ?self.topology(), "Networks bred");
        Ok(Network {
            layers,
            input_size: self.input_size,
        })
    }

    pub fn breed(&self, partner: &Network) -> Result<Network> {
        let mut rng = rand::thread_rng();
        self.breed_with_rng(partner, &mut rng)
    }

    #[must_use]
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Size of the last layer, or the input size when there are no layers.
    #[must_use]
    pub fn output_size(&self) -> usize {
        self.layers
            .last()
            .map_or(self.input_size, Layer::output_size)
    }

    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Output size of each layer, in order.
    #[must_use]
    pub fn topology(&self) -> Vec<usize> {
        self.layers.iter().map(Layer::output_size).collect()
    }
}
