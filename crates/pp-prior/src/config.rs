//! Prior configuration (JSON).
//!
//! ```json
//! {
//!   "variant": "full",
//!   "spin_frequency_hz": 346.53637,
//!   "bounds": { "radius": [4.43, 16.0] }
//! }
//! ```
//!
//! Every field is optional; an empty object yields the default ST-U prior.

use pp_core::Result;
use pp_star::spacetime::J0740_SPIN_FREQUENCY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::custom::CustomPrior;
use crate::space::{ModelVariant, ParameterSpace};

/// Configuration of a [`CustomPrior`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriorConfig {
    /// Which instrument scalings are free parameters.
    #[serde(default)]
    pub variant: ModelVariant,

    /// Coordinate spin frequency of the star [Hz].
    #[serde(default = "default_spin_frequency")]
    pub spin_frequency_hz: f64,

    /// Sampling-bound overrides, `name -> [lower, upper]`.
    #[serde(default)]
    pub bounds: BTreeMap<String, [f64; 2]>,
}

fn default_spin_frequency() -> f64 {
    J0740_SPIN_FREQUENCY
}

impl Default for PriorConfig {
    fn default() -> Self {
        Self {
            variant: ModelVariant::default(),
            spin_frequency_hz: default_spin_frequency(),
            bounds: BTreeMap::new(),
        }
    }
}

impl PriorConfig {
    /// Parse from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read from a JSON file.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// The parameter space with bound overrides applied.
    pub fn parameter_space(&self) -> Result<ParameterSpace> {
        let mut space = ParameterSpace::st_u(self.variant);
        for (name, [lo, hi]) in &self.bounds {
            space.set_bounds(name, (*lo, *hi))?;
        }
        Ok(space)
    }

    /// Build the prior.
    pub fn build(&self) -> Result<CustomPrior> {
        let space = self.parameter_space()?;
        log::debug!(
            "building prior: variant {:?}, {} bound overrides, spin {} Hz",
            self.variant,
            self.bounds.len(),
            self.spin_frequency_hz
        );
        CustomPrior::new(space, self.spin_frequency_hz)
    }
}
