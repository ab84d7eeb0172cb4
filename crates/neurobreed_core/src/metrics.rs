//! Output scoring and logging setup.

use crate::error::{ensure_len, Result};
use crate::network::FeedForward;

/// Distance between an output vector and its target:
/// `sqrt(sum(|actual_i - expected_i|))`.
///
/// This is the square root of the summed absolute differences, not a mean
/// squared error.
pub fn output_error(actual: &[f64], expected: &[f64]) -> Result<f64> {
    ensure_len(actual.len(), expected.len())?;
    let sum: f64 = actual
        .iter()
        .zip(expected)
        .map(|(a, e)| (a - e).abs())
        .sum();
    Ok(sum.sqrt())
}

/// Evaluates `stack` on `inputs` and scores the result against `expected`.
pub fn score<S: FeedForward + ?Sized>(
    stack: &S,
    inputs: &[f64],
    expected: &[f64],
) -> Result<f64> {
    let actual = stack.evaluate(inputs)?;
    output_error(&actual, expected)
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    init_logging_with_level(tracing::Level::INFO);
}

/// Initialize tracing subscriber at `level`. Does nothing if a global
/// subscriber is already installed.
pub fn init_logging_with_level(level: tracing::Level) {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(level)
            .finish(),
    )
    .ok();
}
