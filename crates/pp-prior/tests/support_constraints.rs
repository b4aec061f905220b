//! One test per support condition: start from an admissible point and push a
//! single parameter across the boundary.

use pp_prior::space::{self, ModelVariant, ParameterSpace};
use pp_prior::{CustomPrior, PriorConfig, Rejection};
use pp_star::spacetime::J0740_SPIN_FREQUENCY;

fn prior() -> CustomPrior {
    PriorConfig::default().build().unwrap()
}

fn good_point() -> Vec<f64> {
    vec![
        2.082, 12.0, 1.0, 0.0427, // mass, radius, distance, cos_i
        0.0, 1.0, 0.1, 5.8, // primary: phase, colatitude, radius, temperature
        0.0, 1.5, 0.1, 5.8, // secondary
        1.0, 1.0, 1.0, // XTI alpha, column density, PN alpha
    ]
}

fn with(name: &str, value: f64) -> Vec<f64> {
    let space = ParameterSpace::st_u(ModelVariant::Full);
    let mut theta = good_point();
    theta[space.index(name).unwrap()] = value;
    theta
}

fn assert_rejected(prior: &CustomPrior, theta: &[f64], reason: Rejection) {
    assert_eq!(prior.support_check(theta).unwrap(), Some(reason));
    assert_eq!(prior.evaluate(theta).unwrap(), f64::NEG_INFINITY);
    assert_eq!(prior.density(theta).unwrap(), 0.0);
}

#[test]
fn admissible_point_evaluates_to_zero() {
    let p = prior();
    assert_eq!(p.evaluate(&good_point()).unwrap(), 0.0);
    assert!(p.density(&good_point()).unwrap() > 0.0);
}

#[test]
fn distance_beyond_shklovskii_limit() {
    let p = prior();
    assert_rejected(&p, &with(space::DISTANCE, 1.75), Rejection::Distance);
    assert_eq!(p.evaluate(&with(space::DISTANCE, 1.7)).unwrap(), 0.0);
}

#[test]
fn distance_zero_is_rejected() {
    assert_rejected(&prior(), &with(space::DISTANCE, 0.0), Rejection::Distance);
}

#[test]
fn radius_above_sixteen_km() {
    let p = prior();
    assert_rejected(&p, &with(space::RADIUS, 16.5), Rejection::Radius);
}

#[test]
fn polar_radius_inside_photon_sphere() {
    // R = 9 km at 2.082 M_sun gives R/r_s ~ 1.46.
    assert_rejected(&prior(), &with(space::RADIUS, 9.0), Rejection::PolarRadius);
}

#[test]
fn oblateness_at_high_spin() {
    // A light, large star spinning at 758 Hz has a cross-section with two
    // maxima in |z| but a polar radius still outside the photon sphere.
    let p = CustomPrior::new(ParameterSpace::st_u(ModelVariant::Full), 758.0).unwrap();
    let mut theta = with(space::MASS, 1.2);
    theta[1] = 16.0;
    assert_rejected(&p, &theta, Rejection::Oblateness);
}

#[test]
fn surface_gravity_too_high() {
    // A very compact 1 M_sun star exceeds log10 g = 15 at the pole.
    let mut theta = with(space::MASS, 1.0);
    theta[1] = 4.55;
    assert_rejected(&prior(), &theta, Rejection::SurfaceGravity);
}

#[test]
fn hot_region_labels_must_be_ordered() {
    assert_rejected(&prior(), &with(space::P_COLATITUDE, 1.6), Rejection::ColatitudeOrder);
}

#[test]
fn equal_colatitudes_are_allowed() {
    let p = prior();
    let theta = with(space::P_COLATITUDE, 1.5);
    assert_eq!(p.support_check(&theta).unwrap(), None);
}

#[test]
fn overlapping_hot_regions() {
    // Same meridian (phase offset of half a cycle), 0.2 rad apart, radii sum 0.25.
    let mut theta = with(space::S_PHASE_SHIFT, 0.5);
    theta[9] = 1.2;
    theta[10] = 0.15;
    assert_rejected(&prior(), &theta, Rejection::Overlap);
}

#[test]
fn out_of_bounds_short_circuits() {
    let p = prior();
    let theta = with(space::COS_INCLINATION, -0.1);
    assert_rejected(
        &p,
        &theta,
        Rejection::OutOfBounds { parameter: space::COS_INCLINATION.to_string() },
    );
}

#[test]
fn wrong_length_is_an_error() {
    let p = prior();
    assert!(p.evaluate(&good_point()[..14]).is_err());
    assert!(p.density(&[]).is_err());
    assert!(p.transform(&good_point()[..3]).is_err());
    assert!(p.support_check(&good_point()[..13]).is_err());
}

#[test]
fn default_spin_matches_psr_j0740() {
    assert_eq!(prior().spin_frequency(), J0740_SPIN_FREQUENCY);
}
