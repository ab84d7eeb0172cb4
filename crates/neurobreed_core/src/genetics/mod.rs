//! Concrete strategies: activators, gene creators and breeders.

pub mod activation;
pub mod creation;
pub mod crossover;

pub use activation::{LogisticSigmoidActivator, TanhActivator};
pub use creation::{ConstantGeneCreator, NormallyDistributedGeneCreator, StandardGeneCreator};
pub use crossover::{GaussianBreeder, GeneSource, NormalBreeder};
