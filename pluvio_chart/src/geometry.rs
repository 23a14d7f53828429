// Copyright 2026 the Pluvio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;
use peniko::Color;

/// Error returned for geometry that cannot describe a chart.
///
/// Geometry is validated up front by [`render`](crate::render); no paths
/// are emitted for invalid geometry and there is no partial recovery.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// `base_radius` is not a positive finite number.
    NonPositiveRadius,
    /// `hole_radius_fraction` falls outside `[0, 1)`.
    HoleFractionOutOfRange,
    /// `slice_gap_degrees` is negative (or not a number).
    NegativeSliceGap,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveRadius => write!(f, "chart base radius must be positive"),
            Self::HoleFractionOutOfRange => {
                write!(f, "hole radius fraction must lie in [0, 1)")
            }
            Self::NegativeSliceGap => write!(f, "slice gap must be a non-negative angle"),
        }
    }
}

impl core::error::Error for GeometryError {}

/// Immutable geometry snapshot for one render pass.
///
/// Each call to [`render`](crate::render) receives its own snapshot; there
/// is no sharing between passes and no interior mutability.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    /// Center of the chart in display coordinates.
    pub center: Point,
    /// Outer radius of a full-intensity sector, in display units.
    pub base_radius: f64,
    /// Inner hole radius as a fraction of `base_radius`, in `[0, 1)`.
    ///
    /// Only consulted when `inner_hole` is set.
    pub hole_radius_fraction: f64,
    /// Angular whitespace between adjacent visible sectors, in degrees.
    ///
    /// Suppressed when at most one sector is visible; a gap is only
    /// meaningful relative to a neighbor.
    pub slice_gap_degrees: f64,
    /// Rotation of bucket 0's slot start, in degrees.
    ///
    /// The default of 270° puts bucket 0 at 12 o'clock under the crate's
    /// y-down, clockwise angle convention.
    pub rotation_degrees: f64,
    /// Draw sectors as annuli around a center hole instead of wedges.
    pub inner_hole: bool,
    /// Base fill color; each sector multiplies its probability into the
    /// alpha channel. White in the reference display.
    pub fill: Color,
}

impl ChartGeometry {
    /// Rotation that places bucket 0 at the 12-o'clock position.
    pub const TWELVE_OCLOCK_ROTATION: f64 = 270.0;

    /// Check this geometry against the documented invariants.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !(self.base_radius > 0.0 && self.base_radius.is_finite()) {
            return Err(GeometryError::NonPositiveRadius);
        }
        if !(self.hole_radius_fraction >= 0.0 && self.hole_radius_fraction < 1.0) {
            return Err(GeometryError::HoleFractionOutOfRange);
        }
        if !(self.slice_gap_degrees >= 0.0 && self.slice_gap_degrees.is_finite()) {
            return Err(GeometryError::NegativeSliceGap);
        }
        Ok(())
    }
}

impl Default for ChartGeometry {
    /// Unit-radius wedge chart centered at the origin, bucket 0 at
    /// 12 o'clock, no hole, no gap, white fill.
    fn default() -> Self {
        Self {
            center: Point::ORIGIN,
            base_radius: 1.0,
            hole_radius_fraction: 0.0,
            slice_gap_degrees: 0.0,
            rotation_degrees: Self::TWELVE_OCLOCK_ROTATION,
            inner_hole: false,
            fill: Color::WHITE,
        }
    }
}
