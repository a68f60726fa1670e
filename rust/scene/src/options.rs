// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Import configuration
//!
//! Options are plain data, immutable for the duration of one import call.
//! The defaults reproduce the auto-quality baseline: millimeter output,
//! bounding-box-relative tessellation, no caller-supplied values.

use std::fmt;

use crate::error::{Error, Result};
use crate::units::LinearUnit;

/// How the caller's linear deflection value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LinearDeflectionType {
    /// Derive the tolerance from model size; any supplied value is ignored
    #[default]
    Auto,
    /// Fraction of the model bounding-box diagonal
    BoundingBoxRatio,
    /// Absolute distance in the selected linear unit
    AbsoluteValue,
}

impl LinearDeflectionType {
    /// Resolve a deflection type name as host parameter strings spell it
    pub fn from_name(name: &str) -> Result<LinearDeflectionType> {
        match name {
            "auto" => Ok(LinearDeflectionType::Auto),
            "bounding_box_ratio" => Ok(LinearDeflectionType::BoundingBoxRatio),
            "absolute_value" => Ok(LinearDeflectionType::AbsoluteValue),
            _ => Err(Error::InvalidDeflectionType(name.to_string())),
        }
    }
}

impl fmt::Display for LinearDeflectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinearDeflectionType::Auto => "auto",
            LinearDeflectionType::BoundingBoxRatio => "bounding_box_ratio",
            LinearDeflectionType::AbsoluteValue => "absolute_value",
        };
        write!(f, "{}", name)
    }
}

/// Parameters for one import call
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImportOptions {
    /// Unit of the output coordinates
    pub linear_unit: LinearUnit,
    /// Interpretation of `linear_deflection`
    pub linear_deflection_type: LinearDeflectionType,
    /// Linear deflection value; meaning depends on the type
    pub linear_deflection: Option<f64>,
    /// Angular deflection in radians
    pub angular_deflection: Option<f64>,
}
