//! Parameter description types

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Closed interval `(lower, upper)`.
pub type Bounds = (f64, f64);

/// A single named scalar parameter of a prior.
///
/// `bounds` is the range a point must lie in to be considered at all (and the
/// range default uniform sampling covers). `strict_bounds` is the absolute
/// physical range; truncated distributions are clipped against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Unique parameter name.
    pub name: String,

    /// Sampling bounds (inclusive).
    pub bounds: Bounds,

    /// Absolute physical bounds (inclusive). Must contain `bounds`.
    pub strict_bounds: Bounds,

    /// Human-readable description with units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Parameter {
    /// Create a parameter whose sampling bounds equal its strict bounds.
    pub fn new(name: impl Into<String>, bounds: Bounds) -> Self {
        Self { name: name.into(), bounds, strict_bounds: bounds, description: None }
    }

    /// Set strict bounds.
    pub fn with_strict_bounds(mut self, strict_bounds: Bounds) -> Self {
        self.strict_bounds = strict_bounds;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether `value` lies within the sampling bounds.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && self.bounds.0 <= value && value <= self.bounds.1
    }

    /// Validate bounds: finite, ordered, and nested inside strict bounds.
    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = self.bounds;
        let (slo, shi) = self.strict_bounds;
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(Error::Validation(format!(
                "parameter '{}': bounds must be finite with lower < upper, got ({}, {})",
                self.name, lo, hi
            )));
        }
        if slo.is_nan() || shi.is_nan() || slo > lo || shi < hi {
            return Err(Error::Validation(format!(
                "parameter '{}': bounds ({}, {}) must lie within strict bounds ({}, {})",
                self.name, lo, hi, slo, shi
            )));
        }
        Ok(())
    }
}
