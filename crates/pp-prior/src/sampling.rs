//! Drawing from the support by rejection, and support-volume estimates.
//!
//! Inverse sampling ignores the hard support, so a nested sampler has to
//! resample rejected hypercube points. The same loop gives the fraction of the
//! unit hypercube that maps into the support, which is needed to normalise
//! the prior (and to correct the evidence).

use pp_core::{Error, Prior, Result};
use rand::Rng;
use serde::Serialize;

/// Base-10 exponent of the number of draws used to estimate the support
/// fraction (`10^4` draws).
pub const DRAWS_FROM_SUPPORT: u32 = 4;

/// Default cap on hypercube draws per requested sample.
pub const MAX_ATTEMPTS_PER_SAMPLE: usize = 10_000;

/// Accepted samples plus acceptance statistics.
#[derive(Debug, Clone, Serialize)]
pub struct DrawResult {
    /// Accepted parameter vectors.
    pub samples: Vec<Vec<f64>>,
    /// Total hypercube points tried.
    pub n_attempts: usize,
    /// `samples.len() / n_attempts`.
    pub acceptance: f64,
}

/// A uniform point in the `dim`-dimensional unit hypercube.
pub fn random_hypercube<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> Vec<f64> {
    (0..dim).map(|_| rng.random()).collect()
}

/// Draw `n` points from the support of `prior` by inverse sampling and rejection.
///
/// Fails if more than `n * MAX_ATTEMPTS_PER_SAMPLE` draws are needed, which
/// signals an (almost) empty support.
pub fn draw<P: Prior + ?Sized, R: Rng + ?Sized>(
    prior: &P,
    n: usize,
    rng: &mut R,
) -> Result<DrawResult> {
    let max_attempts = n.saturating_mul(MAX_ATTEMPTS_PER_SAMPLE).max(MAX_ATTEMPTS_PER_SAMPLE);
    let mut samples = Vec::with_capacity(n);
    let mut n_attempts = 0usize;

    while samples.len() < n {
        if n_attempts >= max_attempts {
            return Err(Error::Computation(format!(
                "only {} of {} samples accepted after {} draws; support may be empty",
                samples.len(),
                n,
                n_attempts
            )));
        }
        n_attempts += 1;
        let theta = prior.inverse_sample(&random_hypercube(prior.dim(), rng))?;
        if prior.evaluate(&theta)?.is_finite() {
            samples.push(theta);
        }
    }

    let acceptance = if n_attempts > 0 { samples.len() as f64 / n_attempts as f64 } else { 1.0 };
    if acceptance < 0.01 {
        log::warn!("low acceptance fraction {:.4} when drawing from the support", acceptance);
    }
    log::debug!("drew {} samples in {} attempts", samples.len(), n_attempts);
    Ok(DrawResult { samples, n_attempts, acceptance })
}

/// Fraction of the unit hypercube whose inverse sample lies in the support.
///
/// Uses `n_draws` uniform draws; pass `10usize.pow(DRAWS_FROM_SUPPORT)` for
/// the default.
pub fn estimate_hypercube_fraction<P: Prior + ?Sized, R: Rng + ?Sized>(
    prior: &P,
    n_draws: usize,
    rng: &mut R,
) -> Result<f64> {
    if n_draws == 0 {
        return Err(Error::Validation("n_draws must be > 0".to_string()));
    }
    let mut accepted = 0usize;
    for _ in 0..n_draws {
        let theta = prior.inverse_sample(&random_hypercube(prior.dim(), rng))?;
        if prior.evaluate(&theta)?.is_finite() {
            accepted += 1;
        }
    }
    let fraction = accepted as f64 / n_draws as f64;
    log::debug!("hypercube support fraction {:.4} from {} draws", fraction, n_draws);
    Ok(fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct HalfLine;

    impl Prior for HalfLine {
        fn dim(&self) -> usize {
            1
        }

        fn parameter_names(&self) -> Vec<String> {
            vec!["x".to_string()]
        }

        fn evaluate(&self, theta: &[f64]) -> Result<f64> {
            Ok(if theta[0] < 0.25 { 0.0 } else { f64::NEG_INFINITY })
        }

        fn inverse_sample(&self, hypercube: &[f64]) -> Result<Vec<f64>> {
            Ok(hypercube.to_vec())
        }
    }

    struct Empty;

    impl Prior for Empty {
        fn dim(&self) -> usize {
            1
        }

        fn parameter_names(&self) -> Vec<String> {
            vec!["x".to_string()]
        }

        fn evaluate(&self, _theta: &[f64]) -> Result<f64> {
            Ok(f64::NEG_INFINITY)
        }

        fn inverse_sample(&self, hypercube: &[f64]) -> Result<Vec<f64>> {
            Ok(hypercube.to_vec())
        }
    }

    #[test]
    fn test_draw_respects_support() {
        let mut rng = StdRng::seed_from_u64(11);
        let res = draw(&HalfLine, 200, &mut rng).unwrap();
        assert_eq!(res.samples.len(), 200);
        assert!(res.samples.iter().all(|s| s[0] < 0.25));
        assert!(res.n_attempts >= 200);
        assert!(res.acceptance > 0.15 && res.acceptance < 0.35, "acc={}", res.acceptance);
    }

    #[test]
    fn test_fraction_estimate() {
        let mut rng = StdRng::seed_from_u64(3);
        let f = estimate_hypercube_fraction(&HalfLine, 10usize.pow(DRAWS_FROM_SUPPORT), &mut rng)
            .unwrap();
        assert!((f - 0.25).abs() < 0.02, "fraction={}", f);
    }

    #[test]
    fn test_empty_support_fails() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(draw(&Empty, 1, &mut rng).is_err());
        assert_eq!(estimate_hypercube_fraction(&Empty, 100, &mut rng).unwrap(), 0.0);
        assert!(estimate_hypercube_fraction(&Empty, 0, &mut rng).is_err());
    }

    #[test]
    fn test_zero_samples() {
        let mut rng = StdRng::seed_from_u64(5);
        let res = draw(&HalfLine, 0, &mut rng).unwrap();
        assert!(res.samples.is_empty());
        assert_eq!(res.acceptance, 1.0);
    }
}
