//! Normal distribution utilities.

use pp_core::{Error, Result};
use statrs::function::erf::{erfc, erfc_inv};
use std::f64::consts::SQRT_2;

/// Natural log of `sqrt(2π)`.
///
/// `ln(sqrt(2π)) = 0.5*ln(2π)` (precomputed to keep this crate const-friendly).
pub(crate) const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// `1 / sqrt(2π)`.
const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

pub(crate) fn check_sigma(sigma: f64) -> Result<()> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(Error::Validation(format!("sigma must be finite and > 0, got {}", sigma)));
    }
    Ok(())
}

/// Standard normal density `φ(z)`.
#[inline]
pub fn std_pdf(z: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * z * z).exp()
}

/// Standard normal CDF `Φ(z)`.
#[inline]
pub fn std_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

/// Standard normal survival function `1 - Φ(z)`, accurate in the upper tail.
#[inline]
pub fn std_sf(z: f64) -> f64 {
    0.5 * erfc(z / SQRT_2)
}

/// Standard normal quantile `Φ⁻¹(p)`; `±inf` at the endpoints.
pub fn std_quantile(p: f64) -> Result<f64> {
    crate::math::check_unit(p)?;
    if p == 0.0 {
        return Ok(f64::NEG_INFINITY);
    }
    if p == 1.0 {
        return Ok(f64::INFINITY);
    }
    Ok(-SQRT_2 * erfc_inv(2.0 * p))
}

/// Log-PDF of a Normal distribution `N(mu, sigma)` at `x`.
///
/// `log p(x) = -0.5 * ((x-mu)/sigma)^2 - ln(sigma) - ln(sqrt(2π))`
pub fn logpdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    check_sigma(sigma)?;
    let z = (x - mu) / sigma;
    Ok(-0.5 * z * z - sigma.ln() - LN_SQRT_2PI)
}

/// PDF of `N(mu, sigma)` at `x`.
pub fn pdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    check_sigma(sigma)?;
    Ok(std_pdf((x - mu) / sigma) / sigma)
}

/// CDF of `N(mu, sigma)` at `x`.
pub fn cdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    check_sigma(sigma)?;
    Ok(std_cdf((x - mu) / sigma))
}

/// Quantile of `N(mu, sigma)` at probability `p`.
pub fn quantile(p: f64, mu: f64, sigma: f64) -> Result<f64> {
    check_sigma(sigma)?;
    Ok(mu + sigma * std_quantile(p)?)
}
