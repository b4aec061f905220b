//! Spherical geometry of hot regions.

/// Great-circle angle between two points on the unit sphere.
///
/// `theta` and `colatitude` are the colatitudes of the two points and `phi`
/// is their azimuthal separation, all in radians.
pub fn angular_separation(theta: f64, phi: f64, colatitude: f64) -> f64 {
    let cos_psi = theta.cos() * colatitude.cos() + theta.sin() * colatitude.sin() * phi.cos();
    cos_psi.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_same_meridian() {
        assert_relative_eq!(angular_separation(1.0, 0.0, 0.4), 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_antipodal() {
        assert_relative_eq!(angular_separation(FRAC_PI_2, PI, FRAC_PI_2), PI, epsilon = 1e-12);
        assert_relative_eq!(angular_separation(0.0, 0.3, PI), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_equator_quarter_turn() {
        let psi = angular_separation(FRAC_PI_2, FRAC_PI_2, FRAC_PI_2);
        assert_relative_eq!(psi, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_symmetric_in_endpoints_and_phi_sign() {
        let a = angular_separation(0.3, 1.1, 2.0);
        assert_relative_eq!(a, angular_separation(2.0, 1.1, 0.3), epsilon = 1e-14);
        assert_relative_eq!(a, angular_separation(0.3, -1.1, 2.0), epsilon = 1e-14);
    }
}
