//! Core traits
//!
//! A prior is seen by a nested sampler through two operations: a log-density
//! used to reject points outside the support, and an inverse transform from the
//! unit hypercube to parameter space. Anything implementing [`Prior`] can be
//! driven by the same sampling utilities.

use crate::Result;

/// Prior distribution over an ordered parameter vector.
pub trait Prior: Send + Sync {
    /// Number of free parameters (length of `theta` and of a hypercube draw).
    fn dim(&self) -> usize;

    /// Parameter names, in vector order.
    fn parameter_names(&self) -> Vec<String>;

    /// Log-density up to normalisation.
    ///
    /// Returns `0.0` inside the support and `-inf` outside. Malformed input
    /// (wrong length) is an error, not `-inf`.
    fn evaluate(&self, theta: &[f64]) -> Result<f64>;

    /// Map a unit-hypercube point to parameter space.
    fn inverse_sample(&self, hypercube: &[f64]) -> Result<Vec<f64>>;

    /// Normalised-up-to-support density. Defaults to the indicator of the support.
    fn density(&self, theta: &[f64]) -> Result<f64> {
        Ok(if self.evaluate(theta)?.is_finite() { 1.0 } else { 0.0 })
    }

    /// Check that `theta` has the expected length.
    fn check_dim(&self, theta: &[f64]) -> Result<()> {
        if theta.len() != self.dim() {
            return Err(crate::Error::Validation(format!(
                "expected vector of length {}, got {}",
                self.dim(),
                theta.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UnitInterval;

    impl Prior for UnitInterval {
        fn dim(&self) -> usize {
            1
        }

        fn parameter_names(&self) -> Vec<String> {
            vec!["x".to_string()]
        }

        fn evaluate(&self, theta: &[f64]) -> Result<f64> {
            self.check_dim(theta)?;
            Ok(if (0.0..=1.0).contains(&theta[0]) { 0.0 } else { f64::NEG_INFINITY })
        }

        fn inverse_sample(&self, hypercube: &[f64]) -> Result<Vec<f64>> {
            self.check_dim(hypercube)?;
            Ok(hypercube.to_vec())
        }
    }

    #[test]
    fn test_default_density_is_support_indicator() {
        let p = UnitInterval;
        assert_eq!(p.density(&[0.5]).unwrap(), 1.0);
        assert_eq!(p.density(&[1.5]).unwrap(), 0.0);
    }

    #[test]
    fn test_check_dim_rejects_wrong_length() {
        let p = UnitInterval;
        assert!(p.evaluate(&[0.1, 0.2]).is_err());
        assert!(p.inverse_sample(&[]).is_err());
    }
}
