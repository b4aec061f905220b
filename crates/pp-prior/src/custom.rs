//! Joint ST-U prior for PSR J0740+6620.
//!
//! Parameter vector (see [`crate::space`] for names):
//!
//! * `mass`: gravitational mass (M_sun)
//! * `radius`: coordinate equatorial radius (km)
//! * `distance`: distance (kpc)
//! * `cos_inclination`: cosine of Earth inclination to the spin axis
//! * `{p,s}__phase_shift`: hot-region phase shift (cycles, periodic)
//! * `{p,s}__super_colatitude`: hot-region centre colatitude (rad)
//! * `{p,s}__super_radius`: hot-region angular radius (rad)
//! * `{p,s}__super_temperature`: hot-region log10 effective temperature (K)
//! * `XTI__alpha`: NICER effective-area scaling (optional)
//! * `column_density`: hydrogen column density (10^20 cm^-2)
//! * `PN__alpha`: XMM pn effective-area scaling relative to XTI (optional)

use pp_core::{Prior, Result};
use pp_prob::bivariate_normal::BivariateNormal;
use pp_prob::{normal, skew_normal, truncated_normal};
use pp_star::gravity::polar_and_equatorial;
use pp_star::{Spacetime, angular_separation, gravradius};
use rand::Rng;
use serde::Serialize;
use std::f64::consts::TAU;

use crate::constants::PriorConstants;
use crate::sampling::random_hypercube;
use crate::space::{self, ParameterSpace};
use crate::uniform::UniformPrior;

/// Names of the quantities appended by [`CustomPrior::transform`].
pub const DERIVED_NAMES: [&str; 3] =
    ["compactness", "p__phase_shift_shifted", "s__phase_shift_shifted"];

/// Upper distance limit [kpc] from the Shklovskii correction to the spin-down.
const MAX_DISTANCE: f64 = 1.7;
/// Upper radius limit [km] from contemporary equation-of-state theory.
const MAX_RADIUS: f64 = 16.0;
/// Polar radius must exceed this multiple of the Schwarzschild radius
/// (photon sphere, with margin).
const PHOTON_SPHERE: f64 = 1.505;
/// Range of log10 effective gravity [cgs] covered by the atmosphere tables.
const LOG_GRAVITY_RANGE: (f64, f64) = (13.7, 15.0);

/// Reason a point lies outside the support.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum Rejection {
    /// A coordinate lies outside its sampling bounds.
    OutOfBounds {
        /// Offending parameter.
        parameter: String,
    },
    /// Distance outside `(0, 1.7]` kpc.
    Distance,
    /// Equatorial radius above 16 km.
    Radius,
    /// Polar radius inside the Schwarzschild photon sphere.
    PolarRadius,
    /// Surface cross-section is not a single-maximum (elliptical) curve.
    Oblateness,
    /// Polar or equatorial effective gravity outside the atmosphere range.
    SurfaceGravity,
    /// Primary hot region lies below the secondary (labels must be ordered).
    ColatitudeOrder,
    /// Hot regions overlap.
    Overlap,
}

/// Resolved vector positions of the parameters the prior acts on.
#[derive(Debug, Clone, Copy)]
struct Slots {
    mass: usize,
    radius: usize,
    distance: usize,
    cos_inclination: usize,
    p_phase_shift: usize,
    p_colatitude: usize,
    p_radius: usize,
    s_phase_shift: usize,
    s_colatitude: usize,
    s_radius: usize,
    xti_alpha: Option<usize>,
    pn_alpha: Option<usize>,
}

impl Slots {
    fn resolve(space: &ParameterSpace) -> Result<Self> {
        Ok(Self {
            mass: space.require(space::MASS)?,
            radius: space.require(space::RADIUS)?,
            distance: space.require(space::DISTANCE)?,
            cos_inclination: space.require(space::COS_INCLINATION)?,
            p_phase_shift: space.require(space::P_PHASE_SHIFT)?,
            p_colatitude: space.require(space::P_COLATITUDE)?,
            p_radius: space.require(space::P_RADIUS)?,
            s_phase_shift: space.require(space::S_PHASE_SHIFT)?,
            s_colatitude: space.require(space::S_COLATITUDE)?,
            s_radius: space.require(space::S_RADIUS)?,
            xti_alpha: space.index(space::XTI_ALPHA),
            pn_alpha: space.index(space::PN_ALPHA),
        })
    }
}

/// Joint prior: hard physical support plus correlated non-uniform factors.
///
/// Immutable after construction; every operation takes `&self` and returns a
/// fresh vector.
#[derive(Debug, Clone)]
pub struct CustomPrior {
    base: UniformPrior,
    slots: Slots,
    constants: PriorConstants,
    mass_inclination: BivariateNormal,
    alpha_pair: BivariateNormal,
    spin_frequency: f64,
}

impl CustomPrior {
    /// Create the prior over `space` for a star spinning at `spin_frequency` Hz.
    pub fn new(space: ParameterSpace, spin_frequency: f64) -> Result<Self> {
        Self::with_constants(space, spin_frequency, PriorConstants::default())
    }

    /// Create the prior with non-default constants.
    pub fn with_constants(
        space: ParameterSpace,
        spin_frequency: f64,
        constants: PriorConstants,
    ) -> Result<Self> {
        let slots = Slots::resolve(&space)?;
        for name in [space::MASS, space::RADIUS] {
            if let Some((lo, _)) = space.bounds(name) {
                if lo <= 0.0 {
                    return Err(pp_core::Error::Validation(format!(
                        "parameter '{}' must have a positive lower bound, got {}",
                        name, lo
                    )));
                }
            }
        }
        if !spin_frequency.is_finite() || spin_frequency < 0.0 {
            return Err(pp_core::Error::Validation(format!(
                "spin frequency must be finite and >= 0, got {}",
                spin_frequency
            )));
        }

        let mass_inclination = constants.mass_inclination()?;
        let alpha_pair = constants.alpha_pair()?;
        log::debug!(
            "custom prior: {} parameters, XTI alpha {}, PN alpha {}",
            space.len(),
            if slots.xti_alpha.is_some() { "free" } else { "absent" },
            if slots.pn_alpha.is_some() { "free" } else { "absent" },
        );

        Ok(Self {
            base: UniformPrior::new(space),
            slots,
            constants,
            mass_inclination,
            alpha_pair,
            spin_frequency,
        })
    }

    /// The parameter space.
    pub fn space(&self) -> &ParameterSpace {
        self.base.space()
    }

    /// The frozen constants.
    pub fn constants(&self) -> &PriorConstants {
        &self.constants
    }

    /// Spin frequency [Hz] used for the spacetime checks.
    pub fn spin_frequency(&self) -> f64 {
        self.spin_frequency
    }

    /// Names of the quantities appended by [`transform`](Self::transform).
    pub fn derived_names(&self) -> Vec<String> {
        DERIVED_NAMES.iter().map(|s| s.to_string()).collect()
    }

    /// First support condition `theta` violates, `None` if admissible.
    pub fn support_check(&self, theta: &[f64]) -> Result<Option<Rejection>> {
        self.check_dim(theta)?;
        if let Some(i) = self.base.first_out_of_bounds(theta) {
            let parameter = self.space().parameters()[i].name.clone();
            return Ok(Some(Rejection::OutOfBounds { parameter }));
        }
        let s = &self.slots;

        let distance = theta[s.distance];
        if distance <= 0.0 || distance > MAX_DISTANCE {
            return Ok(Some(Rejection::Distance));
        }

        if theta[s.radius] > MAX_RADIUS {
            return Ok(Some(Rejection::Radius));
        }

        let st = Spacetime::new(self.spin_frequency, theta[s.mass], theta[s.radius])?;
        let epsilon = st.epsilon();
        let zeta = st.zeta();
        let shape = -0.788 + 1.030 * zeta;

        let r_p = 1.0 + epsilon * shape;
        if r_p < PHOTON_SPHERE / st.R_r_s() {
            return Ok(Some(Rejection::PolarRadius));
        }

        let mu = (-1.0 / (3.0 * epsilon * shape)).sqrt();
        if mu.is_nan() || mu < 1.0 {
            return Ok(Some(Rejection::Oblateness));
        }

        // Gravity peaks at the pole and is lowest at the equator.
        let (pole, equator) = polar_and_equatorial(st.R(), zeta, epsilon);
        let (g_lo, g_hi) = LOG_GRAVITY_RANGE;
        if ![pole, equator].iter().all(|g| (g_lo..=g_hi).contains(g)) {
            return Ok(Some(Rejection::SurfaceGravity));
        }

        if theta[s.p_colatitude] > theta[s.s_colatitude] {
            return Ok(Some(Rejection::ColatitudeOrder));
        }

        let phi = (theta[s.p_phase_shift] - 0.5 - theta[s.s_phase_shift]) * TAU;
        let separation = angular_separation(theta[s.s_colatitude], phi, theta[s.p_colatitude]);
        if separation < theta[s.p_radius] + theta[s.s_radius] {
            return Ok(Some(Rejection::Overlap));
        }

        Ok(None)
    }

    /// Log-density up to normalisation: `0.0` inside the support, `-inf` outside.
    pub fn evaluate(&self, theta: &[f64]) -> Result<f64> {
        let base = self.base.evaluate(theta)?;
        if !base.is_finite() {
            return Ok(base);
        }
        match self.support_check(theta)? {
            None => Ok(0.0),
            Some(reason) => {
                log::trace!("point rejected: {:?}", reason);
                Ok(f64::NEG_INFINITY)
            }
        }
    }

    /// Location, scale and standardised lower truncation of `cos(inclination)`
    /// conditional on `mass`.
    fn cos_inclination_conditional(&self, mass: f64) -> (f64, f64, f64) {
        let (loc, scale) = self.mass_inclination.conditional_y_given_x(mass);
        let strict_lower = self.space().parameters()[self.slots.cos_inclination].strict_bounds.0;
        let lower = self.constants.cosi_lower_cap.min((strict_lower - loc) / scale);
        (loc, scale, lower)
    }

    /// Prior density (not log); `0.0` outside the support.
    pub fn density(&self, theta: &[f64]) -> Result<f64> {
        if !self.evaluate(theta)?.is_finite() {
            return Ok(0.0);
        }
        let c = &self.constants;
        let s = &self.slots;

        let mut density = 1.0;
        density *=
            skew_normal::pdf(theta[s.distance], c.distance_shape, c.distance_loc, c.distance_scale)?;

        let mass = theta[s.mass];
        density *= truncated_normal::pdf(
            mass,
            -c.mass_truncation,
            c.mass_truncation,
            c.mu_m,
            c.std_m,
        )?;

        let (loc, scale, lower) = self.cos_inclination_conditional(mass);
        density *= truncated_normal::pdf(theta[s.cos_inclination], lower, c.cosi_upper, loc, scale)?;

        // Joint form when both scalings are free.
        match (s.xti_alpha, s.pn_alpha) {
            (Some(xti), Some(pn)) => density *= self.alpha_pair.pdf(theta[xti], theta[pn]),
            (None, Some(pn)) => density *= normal::pdf(theta[pn], c.mu_alpha, c.std_alpha)?,
            _ => {}
        }

        Ok(density)
    }

    /// Natural log of [`density`](Self::density); `-inf` outside the support.
    pub fn log_density(&self, theta: &[f64]) -> Result<f64> {
        Ok(self.density(theta)?.ln())
    }

    /// Map a unit-hypercube point to a parameter vector.
    ///
    /// Later coordinates condition on earlier ones, so the order is fixed:
    /// distance, mass, `cos(inclination)` given mass, colatitudes, XTI
    /// scaling, pn scaling given XTI. The support is not enforced; callers
    /// reject with [`evaluate`](Self::evaluate).
    pub fn inverse_sample(&self, hypercube: &[f64]) -> Result<Vec<f64>> {
        let mut theta = self.base.inverse_sample(hypercube)?;
        let c = &self.constants;
        let s = &self.slots;

        theta[s.distance] = skew_normal::ppf(
            hypercube[s.distance],
            c.distance_shape,
            c.distance_loc,
            c.distance_scale,
        )?;

        theta[s.mass] = truncated_normal::ppf(
            hypercube[s.mass],
            -c.mass_truncation,
            c.mass_truncation,
            c.mu_m,
            c.std_m,
        )?;

        let (loc, scale, lower) = self.cos_inclination_conditional(theta[s.mass]);
        theta[s.cos_inclination] =
            truncated_normal::ppf(hypercube[s.cos_inclination], lower, c.cosi_upper, loc, scale)?;

        // Flat in cos(colatitude): isotropic placement on the sphere.
        for idx in [s.p_colatitude, s.s_colatitude] {
            let (a, b) = self.space().parameters()[idx].bounds;
            let (ca, cb) = (a.cos(), b.cos());
            theta[idx] = (cb + (ca - cb) * hypercube[idx]).clamp(-1.0, 1.0).acos();
        }

        if let Some(xti) = s.xti_alpha {
            theta[xti] = truncated_normal::ppf(
                hypercube[xti],
                -c.alpha_truncation,
                c.alpha_truncation,
                c.mu_alpha,
                c.std_alpha,
            )?;
        }

        if let Some(pn) = s.pn_alpha {
            let (loc, scale) = match s.xti_alpha {
                Some(xti) => self.alpha_pair.conditional_y_given_x(theta[xti]),
                None => (c.mu_alpha, c.std_alpha),
            };
            theta[pn] = truncated_normal::ppf(
                hypercube[pn],
                -c.alpha_truncation,
                c.alpha_truncation,
                loc,
                scale,
            )?;
        }

        Ok(theta)
    }

    /// Draw a fresh uniform hypercube point and map it with
    /// [`inverse_sample`](Self::inverse_sample).
    pub fn inverse_sample_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<f64>> {
        self.inverse_sample(&random_hypercube(self.space().len(), rng))
    }

    /// Append derived quantities for post-processing: compactness
    /// `r_g(M)/R_eq`, then each phase shift folded from `[0, 1)` into
    /// `[-0.5, 0.5]`.
    pub fn transform(&self, theta: &[f64]) -> Result<Vec<f64>> {
        self.check_dim(theta)?;
        let s = &self.slots;
        let mut out = theta.to_vec();
        out.reserve(DERIVED_NAMES.len());
        out.push(gravradius(theta[s.mass]) / theta[s.radius]);
        for idx in [s.p_phase_shift, s.s_phase_shift] {
            let phase = theta[idx];
            out.push(if phase > 0.5 { phase - 1.0 } else { phase });
        }
        Ok(out)
    }
}

impl Prior for CustomPrior {
    fn dim(&self) -> usize {
        self.space().len()
    }

    fn parameter_names(&self) -> Vec<String> {
        self.space().names()
    }

    fn evaluate(&self, theta: &[f64]) -> Result<f64> {
        CustomPrior::evaluate(self, theta)
    }

    fn inverse_sample(&self, hypercube: &[f64]) -> Result<Vec<f64>> {
        CustomPrior::inverse_sample(self, hypercube)
    }

    fn density(&self, theta: &[f64]) -> Result<f64> {
        CustomPrior::density(self, theta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::ModelVariant;
    use approx::assert_relative_eq;
    use pp_star::spacetime::J0740_SPIN_FREQUENCY;

    fn prior(variant: ModelVariant) -> CustomPrior {
        CustomPrior::new(ParameterSpace::st_u(variant), J0740_SPIN_FREQUENCY).unwrap()
    }

    fn good_point() -> Vec<f64> {
        vec![
            2.082, 12.0, 1.0, 0.0427, // mass, radius, distance, cos_i
            0.0, 1.0, 0.1, 5.8, // primary
            0.0, 1.5, 0.1, 5.8, // secondary
            1.0, 1.0, 1.0, // XTI alpha, column density, PN alpha
        ]
    }

    #[test]
    fn test_good_point_is_admissible() {
        let p = prior(ModelVariant::Full);
        assert_eq!(p.support_check(&good_point()).unwrap(), None);
        assert_eq!(p.evaluate(&good_point()).unwrap(), 0.0);
    }

    #[test]
    fn test_base_bounds_short_circuit() {
        let p = prior(ModelVariant::Full);
        let mut theta = good_point();
        theta[7] = 7.5;
        assert_eq!(p.evaluate(&theta).unwrap(), f64::NEG_INFINITY);
        assert_eq!(
            p.support_check(&theta).unwrap(),
            Some(Rejection::OutOfBounds { parameter: space::P_TEMPERATURE.to_string() })
        );
    }

    #[test]
    fn test_density_is_product_of_factors() {
        let p = prior(ModelVariant::Full);
        let theta = good_point();
        let c = PriorConstants::default();

        let f_d = skew_normal::pdf(1.0, 1.7, 1.002, 0.227).unwrap();
        let f_m = truncated_normal::pdf(2.082, -5.0, 5.0, 2.082, 0.0703).unwrap();
        let loc = 0.0427; // mass at its mean
        let scale = c.cond_std();
        let lower = (-10.0f64).min((-1.0 - loc) / scale);
        let f_i = truncated_normal::pdf(0.0427, lower, 10.0, loc, scale).unwrap();
        let rho: f64 = 0.916;
        let f_a = 1.0 / (2.0 * std::f64::consts::PI * 0.104 * 0.104 * (1.0 - rho * rho).sqrt());

        let expected = f_d * f_m * f_i * f_a;
        assert_relative_eq!(p.density(&theta).unwrap(), expected, max_relative = 1e-12);
        assert_relative_eq!(p.log_density(&theta).unwrap(), expected.ln(), epsilon = 1e-10);
    }

    #[test]
    fn test_density_zero_outside_support() {
        let p = prior(ModelVariant::Full);
        let mut theta = good_point();
        theta[2] = 2.0;
        assert_eq!(p.density(&theta).unwrap(), 0.0);
        assert_eq!(p.log_density(&theta).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_density_without_scalings() {
        let full = prior(ModelVariant::Full);
        let none = prior(ModelVariant::NoScaling);
        let theta_full = good_point();
        let mut theta_none = theta_full[..12].to_vec();
        theta_none.push(1.0);

        let rho: f64 = 0.916;
        let f_a = 1.0 / (2.0 * std::f64::consts::PI * 0.104 * 0.104 * (1.0 - rho * rho).sqrt());
        assert_relative_eq!(
            full.density(&theta_full).unwrap(),
            none.density(&theta_none).unwrap() * f_a,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_density_xti_only_has_no_scaling_factor() {
        let xti = prior(ModelVariant::XtiOnly);
        let none = prior(ModelVariant::NoScaling);
        let theta_xti = good_point()[..14].to_vec();
        let mut theta_none = good_point()[..12].to_vec();
        theta_none.push(1.0);

        assert_relative_eq!(
            xti.density(&theta_xti).unwrap(),
            none.density(&theta_none).unwrap(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_density_pn_without_xti_uses_marginal_normal() {
        let params: Vec<_> = ParameterSpace::st_u(ModelVariant::Full)
            .parameters()
            .iter()
            .filter(|p| p.name != space::XTI_ALPHA)
            .cloned()
            .collect();
        let pn_only =
            CustomPrior::new(ParameterSpace::new(params).unwrap(), J0740_SPIN_FREQUENCY).unwrap();
        let none = prior(ModelVariant::NoScaling);

        let mut theta = good_point()[..12].to_vec();
        theta.extend([1.0, 1.05]); // column density, PN alpha
        let mut theta_none = good_point()[..12].to_vec();
        theta_none.push(1.0);

        let f_pn = normal::pdf(1.05, 1.0, 0.104).unwrap();
        assert_relative_eq!(
            pn_only.density(&theta).unwrap(),
            none.density(&theta_none).unwrap() * f_pn,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_transform_appends_derived() {
        let p = prior(ModelVariant::Full);
        let mut theta = good_point();
        theta[4] = 0.7;
        theta[8] = 0.3;
        let out = p.transform(&theta).unwrap();
        assert_eq!(out.len(), theta.len() + DERIVED_NAMES.len());
        assert_eq!(&out[..theta.len()], &theta[..]);
        assert_relative_eq!(out[15], gravradius(2.082) / 12.0, max_relative = 1e-15);
        assert_relative_eq!(out[16], -0.3, epsilon = 1e-15);
        assert_eq!(out[17], 0.3);
        assert_eq!(p.transform(&theta).unwrap(), out);
        assert_eq!(p.derived_names().len(), 3);
    }

    #[test]
    fn test_transform_boundary_phase_is_kept() {
        let p = prior(ModelVariant::Full);
        let mut theta = good_point();
        theta[4] = 0.5;
        let out = p.transform(&theta).unwrap();
        assert_eq!(out[16], 0.5);
    }

    #[test]
    fn test_missing_required_parameter_is_error() {
        let space = ParameterSpace::new(vec![pp_core::Parameter::new("mass", (1.0, 3.0))]).unwrap();
        assert!(CustomPrior::new(space, J0740_SPIN_FREQUENCY).is_err());
    }

    #[test]
    fn test_invalid_frequency_is_error() {
        let space = ParameterSpace::st_u(ModelVariant::Full);
        assert!(CustomPrior::new(space, -1.0).is_err());
    }
}
