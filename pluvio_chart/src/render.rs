// Copyright 2026 the Pluvio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin`, `cos`, `tan`
use pluvio_sectors::{ChartModel, SectorEntry};

use crate::geometry::{ChartGeometry, GeometryError};
use crate::path::{ChartPaths, PathCmd, SectorPath, to_radians};

/// Intensities at or below this magnitude are treated as invisible.
pub const VISIBILITY_EPSILON: f64 = 1e-6;

/// Render a sector model into per-sector vector paths.
///
/// Each visible sector becomes one closed [`SectorPath`]: an outer arc at
/// `base_radius · intensity`, then either a line back to the center (wedge)
/// or a line plus reversed inner arc (annulus, when
/// [`ChartGeometry::inner_hole`] is set). The fill alpha is the sector's
/// probability multiplied into [`ChartGeometry::fill`].
///
/// Angular slots are keyed off the **bucket index**, never the entry's
/// array position, so buckets without data occupy empty angular space and
/// populated sectors stay aligned to their true angle of day. The slice
/// gap is split symmetrically across a sector's two edges and suppressed
/// entirely when at most one sector is visible.
///
/// A malformed entry (zero or negative intensity) is skipped, never
/// fatal; an empty model yields an empty [`ChartPaths`]. The only error is
/// invalid geometry, rejected before any path is emitted.
pub fn render(model: &ChartModel, geometry: &ChartGeometry) -> Result<ChartPaths, GeometryError> {
    geometry.validate()?;

    let slice_angle = model.slice_angle_degrees();
    let visible_count = model
        .entries()
        .iter()
        .filter(|entry| is_visible(entry))
        .count();
    // A gap is only meaningful relative to a neighbor.
    let gap = if visible_count <= 1 {
        0.0
    } else {
        geometry.slice_gap_degrees
    };

    let mut sectors = Vec::with_capacity(visible_count);
    for entry in model.entries() {
        if !is_visible(entry) {
            continue;
        }

        let radius = geometry.base_radius * f64::from(entry.intensity);
        let slot_start = geometry.rotation_degrees + entry.bucket as f64 * slice_angle;
        let start_outer = slot_start + gap / 2.0;
        let sweep_outer = (slice_angle - gap).max(0.0);
        let spacing_applies = gap > 0.0 && slice_angle <= 180.0;

        let outer_start = point_at(geometry.center, radius, start_outer);
        let mut commands = Vec::with_capacity(5);
        commands.push(PathCmd::MoveTo {
            x: outer_start.x,
            y: outer_start.y,
        });
        commands.push(arc_about(geometry.center, radius, start_outer, sweep_outer));

        if geometry.inner_hole {
            let mut inner_radius = geometry.base_radius * geometry.hole_radius_fraction;
            if spacing_applies {
                // Where the two gap edges meet; below this radius the
                // neighboring gaps would overlap into the slice.
                let spaced = min_spaced_radius(
                    geometry.center,
                    radius,
                    slice_angle,
                    outer_start,
                    start_outer,
                    sweep_outer,
                )
                .abs();
                inner_radius = inner_radius.max(spaced);
            }
            // The inner edge never crosses the outer one.
            inner_radius = inner_radius.min(radius);

            let end_inner = start_outer + sweep_outer;
            let inner_end = point_at(geometry.center, inner_radius, end_inner);
            commands.push(PathCmd::LineTo {
                x: inner_end.x,
                y: inner_end.y,
            });
            commands.push(arc_about(
                geometry.center,
                inner_radius,
                end_inner,
                -sweep_outer,
            ));
        } else if spacing_applies {
            // Close to a gap-offset point on the bisector instead of the
            // exact center, avoiding a seam where spaced slices meet.
            let middle = start_outer + sweep_outer / 2.0;
            let offset = min_spaced_radius(
                geometry.center,
                radius,
                slice_angle,
                outer_start,
                start_outer,
                sweep_outer,
            )
            .max(0.0);
            let apex = point_at(geometry.center, offset, middle);
            commands.push(PathCmd::LineTo {
                x: apex.x,
                y: apex.y,
            });
        } else {
            commands.push(PathCmd::LineTo {
                x: geometry.center.x,
                y: geometry.center.y,
            });
        }
        commands.push(PathCmd::Close);

        sectors.push(SectorPath {
            bucket: entry.bucket,
            commands: commands.into_boxed_slice(),
            fill: geometry.fill.multiply_alpha(entry.probability),
        });
    }

    Ok(ChartPaths { sectors })
}

#[inline]
fn is_visible(entry: &SectorEntry) -> bool {
    f64::from(entry.intensity) > VISIBILITY_EPSILON
}

/// Point at `degrees` and `radius` about `center`, y-down/clockwise.
#[inline]
fn point_at(center: Point, radius: f64, degrees: f64) -> Point {
    let theta = to_radians(degrees);
    Point::new(
        center.x + radius * theta.cos(),
        center.y + radius * theta.sin(),
    )
}

#[inline]
fn arc_about(center: Point, radius: f64, start_degrees: f64, sweep_degrees: f64) -> PathCmd {
    PathCmd::Arc {
        cx: center.x,
        cy: center.y,
        radius,
        start_degrees,
        sweep_degrees,
    }
}

/// Smallest radius at which a spaced slice still spans its full gap edges.
///
/// The chord between the spaced arc's endpoints is the base of a triangle
/// whose apex angle equals the slice's, so the triangle height locates
/// where the two gap edges intersect; the remaining arc sagitta is then
/// subtracted. Ported geometry from the radius pie construction.
fn min_spaced_radius(
    center: Point,
    radius: f64,
    slice_angle: f64,
    arc_start: Point,
    start_degrees: f64,
    sweep_degrees: f64,
) -> f64 {
    let end_degrees = start_degrees + sweep_degrees;
    let arc_end = point_at(center, radius, end_degrees);
    let arc_middle = point_at(center, radius, start_degrees + sweep_degrees / 2.0);

    let base = arc_end.distance(arc_start);
    let height = base / 2.0 * to_radians((180.0 - slice_angle) / 2.0).tan();

    let sagitta = arc_middle.distance(arc_start.midpoint(arc_end));
    radius - height - sagitta
}
