//! # pp-star
//!
//! Physics of a rapidly rotating neutron star needed to decide whether a
//! parameter vector describes an admissible star:
//! - physical constants and the gravitational radius
//! - the exterior spacetime summary (`zeta`, `epsilon`, `R/r_s`)
//! - the effective surface gravity of the oblate surface
//! - spherical geometry of hot regions on the surface

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Physical constants (SI) and unit conversions.
pub mod constants;
/// Effective surface gravity of an oblate rotating star.
pub mod gravity;
/// Angular geometry on the stellar surface.
pub mod geometry;
/// Spacetime summary derived from mass, radius and spin.
pub mod spacetime;

pub use constants::gravradius;
pub use geometry::angular_separation;
pub use gravity::effective_gravity;
pub use spacetime::Spacetime;
