//! Probability building blocks for the pulsar prior.
//!
//! Scalar distributions with the parameterisations used by the joint prior:
//! - normal (pdf/cdf/quantile)
//! - truncated normal, with bounds in standard units about `loc`
//! - skew normal (Azzalini), with the CDF via Owen's T
//! - bivariate normal (joint and conditional forms)
//!
//! plus the quadrature and root-finding helpers they share.

pub mod bivariate_normal;
pub mod math;
pub mod normal;
pub mod skew_normal;
pub mod truncated_normal;
