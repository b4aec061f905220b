//! Independent uniform prior over parameter bounds.
//!
//! This is the default every parameter starts from: the support is the box
//! of sampling bounds, and a hypercube coordinate `u` maps linearly onto
//! `[lower, upper]`. Richer priors run this first and then overwrite the
//! coordinates they model explicitly.

use pp_core::{Prior, Result};

use crate::space::ParameterSpace;

/// Product of independent uniforms over each parameter's sampling bounds.
#[derive(Debug, Clone)]
pub struct UniformPrior {
    space: ParameterSpace,
}

impl UniformPrior {
    /// Create a uniform prior over `space`.
    pub fn new(space: ParameterSpace) -> Self {
        Self { space }
    }

    /// The underlying parameter space.
    pub fn space(&self) -> &ParameterSpace {
        &self.space
    }

    /// Index of the first coordinate outside its sampling bounds (or non-finite).
    pub fn first_out_of_bounds(&self, theta: &[f64]) -> Option<usize> {
        self.space.parameters().iter().zip(theta).position(|(p, &x)| !p.contains(x))
    }

    /// Validate a hypercube point: right length and every coordinate in `[0, 1]`.
    pub fn check_hypercube(&self, hypercube: &[f64]) -> Result<()> {
        self.check_dim(hypercube)?;
        for (i, &u) in hypercube.iter().enumerate() {
            if !(0.0..=1.0).contains(&u) {
                return Err(pp_core::Error::Validation(format!(
                    "hypercube coordinate {} ('{}') must be in [0, 1], got {}",
                    i,
                    self.space.parameters()[i].name,
                    u
                )));
            }
        }
        Ok(())
    }
}

impl Prior for UniformPrior {
    fn dim(&self) -> usize {
        self.space.len()
    }

    fn parameter_names(&self) -> Vec<String> {
        self.space.names()
    }

    fn evaluate(&self, theta: &[f64]) -> Result<f64> {
        self.check_dim(theta)?;
        Ok(if self.first_out_of_bounds(theta).is_some() { f64::NEG_INFINITY } else { 0.0 })
    }

    fn inverse_sample(&self, hypercube: &[f64]) -> Result<Vec<f64>> {
        self.check_hypercube(hypercube)?;
        Ok(self
            .space
            .parameters()
            .iter()
            .zip(hypercube)
            .map(|(p, &u)| {
                let (lo, hi) = p.bounds;
                lo + (hi - lo) * u
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::ModelVariant;
    use approx::assert_relative_eq;

    fn prior() -> UniformPrior {
        UniformPrior::new(ParameterSpace::st_u(ModelVariant::Full))
    }

    #[test]
    fn test_inverse_sample_maps_onto_bounds() {
        let p = prior();
        let lo = p.inverse_sample(&vec![0.0; p.dim()]).unwrap();
        let hi = p.inverse_sample(&vec![1.0; p.dim()]).unwrap();
        for (i, param) in p.space().parameters().iter().enumerate() {
            assert_relative_eq!(lo[i], param.bounds.0, epsilon = 1e-15);
            assert_relative_eq!(hi[i], param.bounds.1, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_evaluate_box_support() {
        let p = prior();
        let mid = p.inverse_sample(&vec![0.5; p.dim()]).unwrap();
        assert_eq!(p.evaluate(&mid).unwrap(), 0.0);

        let mut out = mid.clone();
        out[3] = 1.5;
        assert_eq!(p.evaluate(&out).unwrap(), f64::NEG_INFINITY);
        assert_eq!(p.first_out_of_bounds(&out), Some(3));

        let mut nan = mid;
        nan[0] = f64::NAN;
        assert_eq!(p.evaluate(&nan).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_malformed_input_is_error() {
        let p = prior();
        assert!(p.evaluate(&[0.0; 3]).is_err());
        let mut cube = vec![0.5; p.dim()];
        cube[7] = 1.01;
        assert!(p.inverse_sample(&cube).is_err());
    }
}
