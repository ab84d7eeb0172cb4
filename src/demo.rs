//! One evaluate, score and breed round on a configured topology.

use anyhow::Context;
use neurobreed_core::config::AppConfig;
use neurobreed_core::{output_error, Network};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Input vector used when none is supplied: a unit vector along the diagonal.
pub const DEFAULT_INPUT_VALUE: f64 = 0.57735;

/// Target used when none is supplied and the output has three components.
pub const DEFAULT_EXPECTED: [f64; 3] = [0.45882, 0.10196, 0.69804];

#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub fingerprint: String,
    pub parent_output: Vec<f64>,
    pub parent_error: Option<f64>,
    pub child_output: Vec<f64>,
    pub child_error: Option<f64>,
}

/// Builds a parent and a partner network, evaluates the parent, breeds
/// once and evaluates the child.
pub fn run(
    config: &AppConfig,
    inputs: &[f64],
    expected: Option<&[f64]>,
) -> anyhow::Result<DemoReport> {
    config.validate()?;
    let strategies = config.strategy.build();
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let topology = &config.network;
    let parent =
        Network::new_random_with_rng(topology.inputs, &topology.layer_sizes, &strategies, &mut rng);
    let partner =
        Network::new_random_with_rng(topology.inputs, &topology.layer_sizes, &strategies, &mut rng);

    let parent_output = parent.evaluate(inputs).context("evaluating parent network")?;
    let parent_error = expected
        .map(|target| output_error(&parent_output, target))
        .transpose()
        .context("scoring parent network")?;

    let child = parent
        .breed_with_rng(&partner, &mut rng)
        .context("breeding networks")?;
    let child_output = child.evaluate(inputs).context("evaluating child network")?;
    let child_error = expected
        .map(|target| output_error(&child_output, target))
        .transpose()
        .context("scoring child network")?;

    tracing::info!(
        output = ?parent_output,
        error = ?parent_error,
        "Parent evaluated"
    );
    tracing::info!(
        output = ?child_output,
        error = ?child_error,
        "Child evaluated"
    );

    Ok(DemoReport {
        fingerprint: config.fingerprint(),
        parent_output,
        parent_error,
        child_output,
        child_error,
    })
}

/// Parses a comma-separated list of numbers such as `0.5, -1, 2e-3`.
pub fn parse_vector(text: &str) -> anyhow::Result<Vec<f64>> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>()
                .with_context(|| format!("invalid number '{part}'"))
        })
        .collect()
}
