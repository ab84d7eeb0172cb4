//! Configuration for network topology and breeding strategies.
//!
//! Maps onto a `config.toml` file. Every field has a default, so a partial
//! file only overrides what it names.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! seed = 42
//!
//! [network]
//! inputs = 3
//! layer_sizes = [4, 3]
//!
//! [strategy]
//! activator = "logistic_sigmoid"
//! gene_creator = "standard"
//! breeder = "gaussian"
//! mutation_rate = 0.015
//! std_dev = 0.1
//! weighted_sum = "raw"
//! ```

use crate::genetics::{
    GaussianBreeder, LogisticSigmoidActivator, NormalBreeder, NormallyDistributedGeneCreator,
    StandardGeneCreator, TanhActivator,
};
use crate::strategy::{Activator, GeneCreator, NeuronBreeder, Strategies, WeightedSum};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivatorKind {
    #[default]
    LogisticSigmoid,
    Tanh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneCreatorKind {
    /// Uniform in [-1, 1).
    #[default]
    Standard,
    /// Standard normal.
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreederKind {
    /// Inherited genes receive Gaussian noise.
    #[default]
    Gaussian,
    /// Inherited genes are copied verbatim.
    Normal,
}

/// Network topology: input dimension and the output size of each layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    pub inputs: usize,
    pub layer_sizes: Vec<usize>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            inputs: 3,
            layer_sizes: vec![4, 3],
        }
    }
}

/// Named strategy presets plus their scalar parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StrategyConfig {
    pub activator: ActivatorKind,
    pub gene_creator: GeneCreatorKind,
    pub breeder: BreederKind,
    pub mutation_rate: f64,
    /// Standard deviation of the noise added by the Gaussian breeder.
    pub std_dev: f64,
    pub weighted_sum: WeightedSum,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            activator: ActivatorKind::default(),
            gene_creator: GeneCreatorKind::default(),
            breeder: BreederKind::default(),
            mutation_rate: 0.015,
            std_dev: 0.1,
            weighted_sum: WeightedSum::default(),
        }
    }
}

impl StrategyConfig {
    /// Builds the shared strategy bundle. The breeder draws mutations from
    /// the same gene creator used for fresh neurons.
    #[must_use]
    pub fn build(&self) -> Arc<Strategies> {
        let activator: Arc<dyn Activator> = match self.activator {
            ActivatorKind::LogisticSigmoid => Arc::new(LogisticSigmoidActivator),
            ActivatorKind::Tanh => Arc::new(TanhActivator),
        };
        let creator: Arc<dyn GeneCreator> = match self.gene_creator {
            GeneCreatorKind::Standard => Arc::new(StandardGeneCreator),
            GeneCreatorKind::Normal => Arc::new(NormallyDistributedGeneCreator),
        };
        let breeder: Arc<dyn NeuronBreeder> = match self.breeder {
            BreederKind::Gaussian => Arc::new(GaussianBreeder::new(
                self.mutation_rate,
                self.std_dev,
                Arc::clone(&creator),
            )),
            BreederKind::Normal => {
                Arc::new(NormalBreeder::new(self.mutation_rate, Arc::clone(&creator)))
            }
        };
        Arc::new(
            Strategies::from_parts(activator, creator, breeder)
                .with_weighted_sum(self.weighted_sum),
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub network: NetworkConfig,
    pub strategy: StrategyConfig,
    /// Seed for reproducible construction and breeding. `None` uses entropy.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// # Validation Rules
    /// - The input dimension and every layer size must be positive
    /// - Mutation rate must be in [0.0, 1.0]
    /// - Standard deviation must be finite and non-negative
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.network.inputs > 0, "Input count must be positive");
        anyhow::ensure!(
            self.network.layer_sizes.iter().all(|&size| size > 0),
            "Layer sizes must be positive"
        );

        anyhow::ensure!(
            (0.0..=1.0).contains(&self.strategy.mutation_rate),
            "Mutation rate must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.strategy.std_dev.is_finite() && self.strategy.std_dev >= 0.0,
            "Standard deviation must be finite and non-negative"
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// SHA-256 of topology and strategy settings, for tagging runs.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.network).as_bytes());
        hasher.update(format!("{:?}", self.strategy).as_bytes());
        hex::encode(hasher.finalize())
    }
}
