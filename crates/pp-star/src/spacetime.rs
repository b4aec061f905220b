//! Spacetime summary of a rotating star.
//!
//! Everything the support checks need is a function of three numbers: the
//! gravitational mass, the coordinate equatorial radius and the spin
//! frequency.

use pp_core::{Error, Result};
use std::f64::consts::PI;

use crate::constants::{C_SQ, KM, gravradius};

/// Spin frequency of PSR J0740+6620 [Hz].
pub const J0740_SPIN_FREQUENCY: f64 = 346.536_37;

/// Exterior spacetime parameters derived from mass, radius and spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacetime {
    /// Coordinate spin frequency [Hz].
    pub frequency: f64,
    /// Gravitational mass [solar masses].
    pub mass: f64,
    /// Coordinate equatorial radius [km].
    pub radius: f64,
}

impl Spacetime {
    /// Create a spacetime from spin frequency [Hz], mass [M_sun] and equatorial radius [km].
    pub fn new(frequency: f64, mass: f64, radius: f64) -> Result<Self> {
        if !frequency.is_finite() || frequency < 0.0 {
            return Err(Error::Validation(format!(
                "spin frequency must be finite and >= 0, got {}",
                frequency
            )));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::Validation(format!("mass must be finite and > 0, got {}", mass)));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::Validation(format!(
                "radius must be finite and > 0, got {}",
                radius
            )));
        }
        Ok(Self { frequency, mass, radius })
    }

    /// Gravitational radius `G M / c^2` [m].
    pub fn r_g(&self) -> f64 {
        gravradius(self.mass) * KM
    }

    /// Schwarzschild radius `2 G M / c^2` [m].
    pub fn r_s(&self) -> f64 {
        2.0 * self.r_g()
    }

    /// Coordinate equatorial radius [m].
    #[allow(non_snake_case)]
    pub fn R(&self) -> f64 {
        self.radius * KM
    }

    /// Ratio of equatorial radius to Schwarzschild radius.
    #[allow(non_snake_case)]
    pub fn R_r_s(&self) -> f64 {
        self.R() / self.r_s()
    }

    /// Compactness `G M / (R c^2)`.
    pub fn zeta(&self) -> f64 {
        self.r_g() / self.R()
    }

    /// Angular spin frequency [rad s^-1].
    pub fn omega(&self) -> f64 {
        2.0 * PI * self.frequency
    }

    /// Dimensionless spin parameter `Ω² R³ / (G M)`.
    pub fn epsilon(&self) -> f64 {
        let omega = self.omega();
        let r = self.R();
        omega * omega * r * r / (self.zeta() * C_SQ)
    }
}
