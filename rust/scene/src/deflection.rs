// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Deflection resolution
//!
//! Turns the caller's quality parameters into the concrete tolerance pair
//! handed to the kernel tessellator: linear deflection in millimeters and
//! angular deflection in radians. Resolution runs once per import call and
//! the result applies to every solid in the document.

use brep_lite_kernel::BoundingBox;

use crate::error::{Error, Result};
use crate::options::{ImportOptions, LinearDeflectionType};

/// Default linear deflection: the bounding-box ratio in relative modes,
/// a distance in the caller's unit in absolute mode
pub const DEFAULT_LINEAR_DEFLECTION: f64 = 0.001;

/// Default angular deflection in radians
pub const DEFAULT_ANGULAR_DEFLECTION: f64 = 0.5;

/// Smallest diagonal used for relative deflection; keeps the tolerance
/// positive for empty or degenerate models
const MIN_DIAGONAL: f64 = 1e-7;

/// Resolved tessellation tolerances
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Maximum chord deviation in millimeters
    pub linear: f64,
    /// Maximum angle between neighboring segments in radians
    pub angular: f64,
}

/// Resolve import options against the model bounds
pub fn resolve(options: &ImportOptions, bounds: Option<&BoundingBox>) -> Result<Tolerances> {
    // Supplied values are validated regardless of mode
    if let Some(value) = options.linear_deflection {
        check_positive(value)?;
    }
    if let Some(value) = options.angular_deflection {
        check_positive(value)?;
    }

    let linear = match options.linear_deflection_type {
        LinearDeflectionType::Auto => relative_deflection(bounds, DEFAULT_LINEAR_DEFLECTION),
        LinearDeflectionType::BoundingBoxRatio => {
            let ratio = options.linear_deflection.unwrap_or(DEFAULT_LINEAR_DEFLECTION);
            relative_deflection(bounds, ratio)
        }
        LinearDeflectionType::AbsoluteValue => {
            let value = options.linear_deflection.unwrap_or(DEFAULT_LINEAR_DEFLECTION);
            value * options.linear_unit.scale()
        }
    };

    let angular = options
        .angular_deflection
        .unwrap_or(DEFAULT_ANGULAR_DEFLECTION);

    Ok(Tolerances { linear, angular })
}

fn check_positive(value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::NonPositiveDeflection(value));
    }
    Ok(())
}

fn relative_deflection(bounds: Option<&BoundingBox>, ratio: f64) -> f64 {
    let diagonal = bounds.map(BoundingBox::diagonal).unwrap_or(0.0);
    diagonal.max(MIN_DIAGONAL) * ratio
}
