//! Physical constants in SI units.

/// Newtonian gravitational constant [m^3 kg^-1 s^-2].
pub const G: f64 = 6.673_083_1e-11;

/// Speed of light in vacuum [m s^-1].
pub const C: f64 = 2.997_924_58e8;

/// `C * C`.
pub const C_SQ: f64 = C * C;

/// Solar mass [kg].
pub const M_SUN: f64 = 1.988_772_476_704_700_2e30;

/// Metres per kilometre.
pub const KM: f64 = 1.0e3;

/// Gravitational radius `G M / c^2` in km for a mass in solar masses.
#[inline]
pub fn gravradius(mass: f64) -> f64 {
    mass * G * M_SUN / (KM * C_SQ)
}
