// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Linear unit table for output coordinate scaling
//!
//! Kernel geometry is normalized to millimeters; the unit table supplies
//! the scale that converts millimeter coordinates into the caller's unit.

use std::fmt;

use crate::error::{Error, Result};

/// Output coordinate unit for an import call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LinearUnit {
    #[default]
    Millimeter,
    Centimeter,
    Meter,
    Inch,
    Foot,
}

impl LinearUnit {
    /// Millimeters per unit
    #[inline]
    pub fn scale(self) -> f64 {
        match self {
            LinearUnit::Millimeter => 1.0,
            LinearUnit::Centimeter => 10.0,
            LinearUnit::Meter => 1000.0,
            LinearUnit::Inch => 25.4,
            LinearUnit::Foot => 304.8,
        }
    }

    /// Resolve a unit name as host parameter strings spell it.
    /// Unknown names are a configuration error, never a silent default.
    pub fn from_name(name: &str) -> Result<LinearUnit> {
        match name {
            "millimeter" => Ok(LinearUnit::Millimeter),
            "centimeter" => Ok(LinearUnit::Centimeter),
            "meter" => Ok(LinearUnit::Meter),
            "inch" => Ok(LinearUnit::Inch),
            "foot" => Ok(LinearUnit::Foot),
            _ => Err(Error::UnknownUnit(name.to_string())),
        }
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinearUnit::Millimeter => "millimeter",
            LinearUnit::Centimeter => "centimeter",
            LinearUnit::Meter => "meter",
            LinearUnit::Inch => "inch",
            LinearUnit::Foot => "foot",
        };
        write!(f, "{}", name)
    }
}
