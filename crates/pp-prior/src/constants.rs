//! Constants of the non-uniform prior factors.
//!
//! The mass and `cos(inclination)` moments and their correlation come from
//! the radio timing (Shapiro delay) measurement of PSR J0740+6620. The
//! effective-area scalings of the two X-ray instruments share a common
//! calibration uncertainty, hence their strong correlation.

use pp_core::Result;
use pp_prob::bivariate_normal::BivariateNormal;

/// Frozen prior constants. Build once, then derive the correlated pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorConstants {
    /// Correlation between mass and `cos(inclination)`.
    pub corr: f64,
    /// Mean mass [M_sun].
    pub mu_m: f64,
    /// Mass standard deviation [M_sun].
    pub std_m: f64,
    /// Mean `cos(inclination)`.
    pub mu_cosi: f64,
    /// `cos(inclination)` standard deviation.
    pub std_cosi: f64,
    /// Mass truncation half-width in standard deviations.
    pub mass_truncation: f64,
    /// Upper truncation of `cos(inclination)` in conditional standard deviations.
    pub cosi_upper: f64,
    /// Cap on the lower truncation of `cos(inclination)` in conditional standard deviations.
    pub cosi_lower_cap: f64,

    /// Skewness (shape) of the distance prior.
    pub distance_shape: f64,
    /// Location of the distance prior [kpc].
    pub distance_loc: f64,
    /// Scale of the distance prior [kpc].
    pub distance_scale: f64,

    /// Correlation between the two effective-area scalings.
    pub rho: f64,
    /// Mean of each effective-area scaling.
    pub mu_alpha: f64,
    /// Marginal standard deviation of each effective-area scaling.
    pub std_alpha: f64,
    /// Truncation half-width of the scalings in standard deviations.
    pub alpha_truncation: f64,
}

impl Default for PriorConstants {
    fn default() -> Self {
        Self {
            corr: 0.800,
            mu_m: 2.082,
            std_m: 0.0703,
            mu_cosi: 0.0427,
            std_cosi: 0.00304,
            mass_truncation: 5.0,
            cosi_upper: 10.0,
            cosi_lower_cap: -10.0,
            distance_shape: 1.7,
            distance_loc: 1.002,
            distance_scale: 0.227,
            rho: 0.916,
            mu_alpha: 1.0,
            std_alpha: 0.104,
            alpha_truncation: 5.0,
        }
    }
}

impl PriorConstants {
    /// Joint normal of (mass, `cos(inclination)`).
    pub fn mass_inclination(&self) -> Result<BivariateNormal> {
        BivariateNormal::new(self.mu_m, self.mu_cosi, self.std_m, self.std_cosi, self.corr)
    }

    /// Joint normal of the two effective-area scalings.
    pub fn alpha_pair(&self) -> Result<BivariateNormal> {
        BivariateNormal::new(self.mu_alpha, self.mu_alpha, self.std_alpha, self.std_alpha, self.rho)
    }

    /// Conditional standard deviation of `cos(inclination)` given mass.
    pub fn cond_std(&self) -> f64 {
        ((1.0 - self.corr * self.corr) * self.std_cosi * self.std_cosi).sqrt()
    }

    /// Conditional standard deviation of one scaling given the other.
    pub fn cond_std_alpha(&self) -> f64 {
        ((1.0 - self.rho * self.rho) * self.std_alpha * self.std_alpha).sqrt()
    }
}
