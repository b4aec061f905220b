//! # pp-prior
//!
//! Joint prior over the ST-U parameter vector of PSR J0740+6620: two
//! single-temperature circular hot regions with unshared parameters, plus
//! instrument effective-area scalings.
//!
//! The prior combines
//! - a hard physical support (distance, radius, polar radius, oblateness,
//!   surface gravity, hot-region ordering and non-overlap),
//! - a skew-normal distance, a truncated-normal mass and a mass-conditioned
//!   truncated-normal `cos(inclination)`,
//! - a correlated pair of effective-area scalings,
//! - flat-in-cosine hot-region colatitudes,
//!
//! and exposes support evaluation, density, inverse (hypercube) sampling and a
//! post-processing transform.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// JSON configuration for building a prior.
pub mod config;
/// Frozen constants of the correlated factors.
pub mod constants;
/// The joint ST-U prior.
pub mod custom;
/// Rejection sampling from the support and support-volume estimates.
pub mod sampling;
/// Ordered parameter container and the ST-U schema.
pub mod space;
/// Independent uniform prior over parameter bounds.
pub mod uniform;

pub use config::PriorConfig;
pub use constants::PriorConstants;
pub use custom::{CustomPrior, DERIVED_NAMES, Rejection};
pub use sampling::{DRAWS_FROM_SUPPORT, DrawResult, draw, estimate_hypercube_fraction};
pub use space::{ModelVariant, ParameterSpace};
pub use uniform::UniformPrior;
