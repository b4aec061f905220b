//! Effective surface gravity of a rotating, oblate neutron star.
//!
//! Universal fit of AlGendy & Morsink (2014): the gravity at colatitude `θ`
//! relative to the static value `g_0 = G M / (R² sqrt(1 - 2ζ))` is
//!
//! `g(θ)/g_0 = 1 + (c_e + d_e ζ) ε sin²θ + (c_p + d_p ζ) ε cos²θ`
//!
//! Rotation lowers the gravity at the equator and raises it at the pole.

use crate::constants::C_SQ;

const C_E: f64 = -0.791;
const D_E: f64 = 0.776;
const C_P: f64 = 1.138;
const D_P: f64 = -1.431;

/// `log10` of the effective gravity in cgs units (cm s^-2).
///
/// - `cos_colatitude`: cosine of the colatitude (1 at the pole, 0 at the equator)
/// - `radius_eq`: coordinate equatorial radius [m]
/// - `zeta`: compactness `G M / (R c²)`
/// - `epsilon`: spin parameter `Ω² R³ / (G M)`
///
/// Returns NaN when `zeta >= 0.5` (no static surface).
pub fn effective_gravity(cos_colatitude: f64, radius_eq: f64, zeta: f64, epsilon: f64) -> f64 {
    let cos2 = cos_colatitude * cos_colatitude;
    let sin2 = 1.0 - cos2;
    let g_0 = zeta * C_SQ / (radius_eq * (1.0 - 2.0 * zeta).sqrt());
    let ratio = 1.0 + (C_E + D_E * zeta) * epsilon * sin2 + (C_P + D_P * zeta) * epsilon * cos2;
    (100.0 * g_0 * ratio).log10()
}

/// Effective gravity at the pole and at the equator, `(pole, equator)`.
pub fn polar_and_equatorial(radius_eq: f64, zeta: f64, epsilon: f64) -> (f64, f64) {
    (
        effective_gravity(1.0, radius_eq, zeta, epsilon),
        effective_gravity(0.0, radius_eq, zeta, epsilon),
    )
}
