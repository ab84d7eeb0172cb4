use crate::strategy::Activator;

/// Logistic function stretched onto (-1, 1): `2 / (1 + e^-x) - 1`.
///
/// Zero maps to zero and large magnitudes saturate towards the boundaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogisticSigmoidActivator;

impl Activator for LogisticSigmoidActivator {
    fn activate(&self, weighted_sum: f64) -> f64 {
        2.0 / (1.0 + (-weighted_sum).exp()) - 1.0
    }
}

/// Hyperbolic tangent, also bounded in (-1, 1) but steeper around zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TanhActivator;

impl Activator for TanhActivator {
    fn activate(&self, weighted_sum: f64) -> f64 {
        weighted_sum.tanh()
    }
}
