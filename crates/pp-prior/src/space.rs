//! Ordered parameter container.
//!
//! Vector I/O is positional; semantic access is by name. The container owns
//! bounds and strict bounds for every parameter.

use pp_core::{Bounds, Error, Parameter, Result};
use pp_star::gravradius;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Gravitational mass [M_sun].
pub const MASS: &str = "mass";
/// Coordinate equatorial radius [km].
pub const RADIUS: &str = "radius";
/// Distance [kpc].
pub const DISTANCE: &str = "distance";
/// Cosine of the inclination of the line of sight to the spin axis.
pub const COS_INCLINATION: &str = "cos_inclination";
/// Primary hot-region phase shift [cycles].
pub const P_PHASE_SHIFT: &str = "p__phase_shift";
/// Primary hot-region centre colatitude [rad].
pub const P_COLATITUDE: &str = "p__super_colatitude";
/// Primary hot-region angular radius [rad].
pub const P_RADIUS: &str = "p__super_radius";
/// Primary hot-region log10 effective temperature [K].
pub const P_TEMPERATURE: &str = "p__super_temperature";
/// Secondary hot-region phase shift [cycles].
pub const S_PHASE_SHIFT: &str = "s__phase_shift";
/// Secondary hot-region centre colatitude [rad].
pub const S_COLATITUDE: &str = "s__super_colatitude";
/// Secondary hot-region angular radius [rad].
pub const S_RADIUS: &str = "s__super_radius";
/// Secondary hot-region log10 effective temperature [K].
pub const S_TEMPERATURE: &str = "s__super_temperature";
/// NICER XTI energy-independent effective-area scaling.
pub const XTI_ALPHA: &str = "XTI__alpha";
/// Hydrogen column density [10^20 cm^-2].
pub const COLUMN_DENSITY: &str = "column_density";
/// XMM-Newton pn effective-area scaling (relative to XTI).
pub const PN_ALPHA: &str = "PN__alpha";

/// Which instrument scalings are free parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelVariant {
    /// NICER and XMM scalings (15 parameters).
    #[default]
    Full,
    /// NICER scaling only (14 parameters).
    XtiOnly,
    /// No scalings (13 parameters).
    NoScaling,
}

/// Ordered, name-indexed set of parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSpace {
    parameters: Vec<Parameter>,
}

impl ParameterSpace {
    /// Build from an ordered list. Names must be unique and bounds valid.
    pub fn new(parameters: Vec<Parameter>) -> Result<Self> {
        for (i, p) in parameters.iter().enumerate() {
            p.validate()?;
            if parameters[..i].iter().any(|q| q.name == p.name) {
                return Err(Error::Validation(format!("duplicate parameter name '{}'", p.name)));
            }
        }
        Ok(Self { parameters })
    }

    /// The ST-U schema of PSR J0740+6620 for a model variant.
    pub fn st_u(variant: ModelVariant) -> Self {
        let hot_region = |prefix: &str, label: &str| {
            vec![
                Parameter::new(format!("{prefix}__phase_shift"), (0.0, 1.0))
                    .with_description(format!("{label} hot-region phase shift [cycles]")),
                Parameter::new(format!("{prefix}__super_colatitude"), (0.0, PI))
                    .with_description(format!("{label} hot-region centre colatitude [rad]")),
                Parameter::new(format!("{prefix}__super_radius"), (0.0, FRAC_PI_2))
                    .with_description(format!("{label} hot-region angular radius [rad]")),
                Parameter::new(format!("{prefix}__super_temperature"), (5.1, 6.8)).with_description(
                    format!("{label} hot-region log10(effective temperature [K])"),
                ),
            ]
        };

        let mut parameters = vec![
            Parameter::new(MASS, (1.0, 3.0))
                .with_strict_bounds((0.001, 3.0))
                .with_description("gravitational mass [M_sun]"),
            Parameter::new(RADIUS, (3.0 * gravradius(1.0), 20.0))
                .with_description("coordinate equatorial radius [km]"),
            Parameter::new(DISTANCE, (0.0, 10.0)).with_description("distance [kpc]"),
            Parameter::new(COS_INCLINATION, (0.0, 1.0))
                .with_strict_bounds((-1.0, 1.0))
                .with_description("cos(inclination of line of sight to spin axis)"),
        ];
        parameters.extend(hot_region("p", "primary"));
        parameters.extend(hot_region("s", "secondary"));
        if variant != ModelVariant::NoScaling {
            parameters.push(
                Parameter::new(XTI_ALPHA, (0.0, 2.0))
                    .with_description("NICER XTI energy-independent effective-area scaling"),
            );
        }
        parameters.push(
            Parameter::new(COLUMN_DENSITY, (0.0, 10.0))
                .with_description("hydrogen column density [10^20 cm^-2]"),
        );
        if variant == ModelVariant::Full {
            parameters.push(
                Parameter::new(PN_ALPHA, (0.0, 2.0))
                    .with_description("XMM pn energy-independent effective-area scaling"),
            );
        }
        Self { parameters }
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the space is empty.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Parameters in vector order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Parameter names in vector order.
    pub fn names(&self) -> Vec<String> {
        self.parameters.iter().map(|p| p.name.clone()).collect()
    }

    /// Position of `name`, `None` if the parameter is not in this space.
    pub fn index(&self, name: &str) -> Option<usize> {
        self.parameters.iter().position(|p| p.name == name)
    }

    /// Position of a parameter the caller cannot do without.
    pub fn require(&self, name: &str) -> Result<usize> {
        self.index(name)
            .ok_or_else(|| Error::Validation(format!("parameter '{}' is not defined", name)))
    }

    /// Parameter by name.
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.index(name).map(|i| &self.parameters[i])
    }

    /// Sampling bounds of `name`.
    pub fn bounds(&self, name: &str) -> Option<Bounds> {
        self.get_param(name).map(|p| p.bounds)
    }

    /// Strict bounds of `name`.
    pub fn strict_bounds(&self, name: &str) -> Option<Bounds> {
        self.get_param(name).map(|p| p.strict_bounds)
    }

    /// Replace the sampling bounds of `name`; the new bounds must lie within
    /// the strict bounds.
    pub fn set_bounds(&mut self, name: &str, bounds: Bounds) -> Result<()> {
        let i = self.require(name)?;
        let mut p = self.parameters[i].clone();
        p.bounds = bounds;
        p.validate()?;
        self.parameters[i] = p;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_st_u_variants() {
        let full = ParameterSpace::st_u(ModelVariant::Full);
        assert_eq!(full.len(), 15);
        assert_eq!(full.index(MASS), Some(0));
        assert_eq!(full.index(S_TEMPERATURE), Some(11));
        assert_eq!(full.index(XTI_ALPHA), Some(12));
        assert_eq!(full.index(COLUMN_DENSITY), Some(13));
        assert_eq!(full.index(PN_ALPHA), Some(14));

        let xti = ParameterSpace::st_u(ModelVariant::XtiOnly);
        assert_eq!(xti.len(), 14);
        assert_eq!(xti.index(PN_ALPHA), None);

        let none = ParameterSpace::st_u(ModelVariant::NoScaling);
        assert_eq!(none.len(), 13);
        assert_eq!(none.index(XTI_ALPHA), None);
        assert_eq!(none.index(COLUMN_DENSITY), Some(12));
    }

    #[test]
    fn test_schema_is_valid() {
        let space = ParameterSpace::st_u(ModelVariant::Full);
        assert!(ParameterSpace::new(space.parameters().to_vec()).is_ok());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let p = Parameter::new("x", (0.0, 1.0));
        assert!(ParameterSpace::new(vec![p.clone(), p]).is_err());
    }

    #[test]
    fn test_named_access() {
        let space = ParameterSpace::st_u(ModelVariant::XtiOnly);
        assert_eq!(space.index(DISTANCE), Some(2));
        assert_eq!(space.index(PN_ALPHA), None);
        assert_eq!(space.strict_bounds(COS_INCLINATION), Some((-1.0, 1.0)));
        assert!(space.require(PN_ALPHA).is_err());
    }

    #[test]
    fn test_set_bounds_respects_strict_bounds() {
        let mut space = ParameterSpace::st_u(ModelVariant::Full);
        assert!(space.set_bounds(COS_INCLINATION, (-0.5, 0.5)).is_ok());
        assert_eq!(space.bounds(COS_INCLINATION), Some((-0.5, 0.5)));
        assert!(space.set_bounds(COS_INCLINATION, (-2.0, 0.5)).is_err());
        assert!(space.set_bounds("nope", (0.0, 1.0)).is_err());
    }
}
