//! Bivariate normal distribution.

use pp_core::{Error, Result};
use std::f64::consts::PI;

use crate::normal::check_sigma;

/// Parameters of a bivariate normal `N((mu_x, mu_y), Σ)` with marginal
/// standard deviations `sigma_x`, `sigma_y` and correlation `rho`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BivariateNormal {
    /// Mean of the first coordinate.
    pub mu_x: f64,
    /// Mean of the second coordinate.
    pub mu_y: f64,
    /// Marginal standard deviation of the first coordinate.
    pub sigma_x: f64,
    /// Marginal standard deviation of the second coordinate.
    pub sigma_y: f64,
    /// Correlation coefficient, `|rho| < 1`.
    pub rho: f64,
}

impl BivariateNormal {
    /// Create and validate a bivariate normal.
    pub fn new(mu_x: f64, mu_y: f64, sigma_x: f64, sigma_y: f64, rho: f64) -> Result<Self> {
        check_sigma(sigma_x)?;
        check_sigma(sigma_y)?;
        if !rho.is_finite() || rho.abs() >= 1.0 {
            return Err(Error::Validation(format!(
                "correlation must satisfy |rho| < 1, got {}",
                rho
            )));
        }
        if !mu_x.is_finite() || !mu_y.is_finite() {
            return Err(Error::Validation(format!(
                "means must be finite, got ({}, {})",
                mu_x, mu_y
            )));
        }
        Ok(Self { mu_x, mu_y, sigma_x, sigma_y, rho })
    }

    /// Joint density at `(x, y)`, explicit exponential form.
    pub fn pdf(&self, x: f64, y: f64) -> f64 {
        let a = (x - self.mu_x) / self.sigma_x;
        let b = (y - self.mu_y) / self.sigma_y;
        let one_m_rho2 = 1.0 - self.rho * self.rho;
        let exponent = (a * a + b * b - 2.0 * self.rho * a * b) / (2.0 * one_m_rho2);
        (-exponent).exp() / (2.0 * PI * self.sigma_x * self.sigma_y * one_m_rho2.sqrt())
    }

    /// Joint log-density at `(x, y)`.
    pub fn logpdf(&self, x: f64, y: f64) -> f64 {
        self.pdf(x, y).ln()
    }

    /// Location and scale of `y | x`.
    ///
    /// `loc = mu_y + (sigma_y/sigma_x) rho (x - mu_x)`,
    /// `scale = sigma_y sqrt(1 - rho²)`.
    pub fn conditional_y_given_x(&self, x: f64) -> (f64, f64) {
        let loc = self.mu_y + (self.sigma_y / self.sigma_x) * self.rho * (x - self.mu_x);
        let scale = ((1.0 - self.rho * self.rho) * self.sigma_y * self.sigma_y).sqrt();
        (loc, scale)
    }
}
