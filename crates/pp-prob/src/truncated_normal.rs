//! Truncated normal distribution.
//!
//! Truncation bounds `a < b` are given in standard units about `loc`, so the
//! support in data space is `[loc + a*scale, loc + b*scale]`. Either bound may
//! be infinite.

use pp_core::{Error, Result};

use crate::normal::{check_sigma, std_cdf, std_pdf, std_quantile, std_sf};

fn check_bounds(a: f64, b: f64) -> Result<()> {
    if a.is_nan() || b.is_nan() || a >= b {
        return Err(Error::Validation(format!(
            "truncation bounds must satisfy a < b, got a={} b={}",
            a, b
        )));
    }
    Ok(())
}

/// Probability mass of the standard normal on `[a, b]`.
///
/// Uses the survival function when the interval lies in the upper tail to
/// avoid cancellation in `Φ(b) - Φ(a)`.
fn mass(a: f64, b: f64) -> f64 {
    if a > 0.0 { std_sf(a) - std_sf(b) } else { std_cdf(b) - std_cdf(a) }
}

/// PDF of the truncated normal at `x`; `0.0` outside the support.
pub fn pdf(x: f64, a: f64, b: f64, loc: f64, scale: f64) -> Result<f64> {
    check_sigma(scale)?;
    check_bounds(a, b)?;
    let z = (x - loc) / scale;
    if !(a..=b).contains(&z) {
        return Ok(0.0);
    }
    let z_mass = mass(a, b);
    if z_mass <= 0.0 {
        return Err(Error::Computation(format!(
            "truncation interval [{}, {}] has no numerical probability mass",
            a, b
        )));
    }
    Ok(std_pdf(z) / (scale * z_mass))
}

/// Log-PDF of the truncated normal at `x`; `-inf` outside the support.
pub fn logpdf(x: f64, a: f64, b: f64, loc: f64, scale: f64) -> Result<f64> {
    Ok(pdf(x, a, b, loc, scale)?.ln())
}

/// CDF of the truncated normal at `x`.
pub fn cdf(x: f64, a: f64, b: f64, loc: f64, scale: f64) -> Result<f64> {
    check_sigma(scale)?;
    check_bounds(a, b)?;
    let z = (x - loc) / scale;
    if z <= a {
        return Ok(0.0);
    }
    if z >= b {
        return Ok(1.0);
    }
    Ok((mass(a, z) / mass(a, b)).clamp(0.0, 1.0))
}

/// Inverse CDF (percent-point function) of the truncated normal at `u ∈ [0, 1]`.
///
/// `u = 0` maps to the lower support edge and `u = 1` to the upper one.
pub fn ppf(u: f64, a: f64, b: f64, loc: f64, scale: f64) -> Result<f64> {
    crate::math::check_unit(u)?;
    check_sigma(scale)?;
    check_bounds(a, b)?;
    if u == 0.0 {
        return Ok(loc + scale * a);
    }
    if u == 1.0 {
        return Ok(loc + scale * b);
    }

    let z = if a > 0.0 {
        // Upper tail: invert the survival function.
        let sf_a = std_sf(a);
        let target = sf_a - u * (sf_a - std_sf(b));
        -std_quantile(target.clamp(0.0, 1.0))?
    } else {
        let cdf_a = std_cdf(a);
        let target = cdf_a + u * (std_cdf(b) - cdf_a);
        std_quantile(target.clamp(0.0, 1.0))?
    };

    Ok(loc + scale * z.clamp(a, b))
}
