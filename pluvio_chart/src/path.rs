// Copyright 2026 the Pluvio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Vec2};
use peniko::Color;

/// Degrees → radians at the point of trigonometric evaluation.
#[inline]
pub(crate) fn to_radians(degrees: f64) -> f64 {
    degrees * (core::f64::consts::PI / 180.0)
}

/// One drawing instruction of a sector subpath.
///
/// Commands are self-contained plain data in display coordinates. Angles
/// stay in degrees inside the command buffer, under the crate's y-down
/// clockwise convention, and convert to radians only when evaluated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCmd {
    /// Move the current point without drawing.
    MoveTo {
        /// X coordinate of the new point.
        x: f64,
        /// Y coordinate of the new point.
        y: f64,
    },
    /// Draw a line from the current point to the given point.
    LineTo {
        /// X coordinate of the line end.
        x: f64,
        /// Y coordinate of the line end.
        y: f64,
    },
    /// Draw a circular arc from the current point, which must coincide
    /// with the arc's start point.
    Arc {
        /// X coordinate of the arc center.
        cx: f64,
        /// Y coordinate of the arc center.
        cy: f64,
        /// Arc radius.
        radius: f64,
        /// Angle of the start point, in degrees.
        start_degrees: f64,
        /// Signed sweep, in degrees; negative sweeps run counter-clockwise
        /// on screen.
        sweep_degrees: f64,
    },
    /// Close the current subpath.
    Close,
}

/// The filled outline of one visible sector.
#[derive(Clone, Debug, PartialEq)]
pub struct SectorPath {
    /// Bucket index this sector occupies on the face.
    pub bucket: usize,
    /// Drawing instructions forming one closed subpath.
    pub commands: Box<[PathCmd]>,
    /// Fill color with the sector's probability already multiplied into
    /// the alpha channel.
    pub fill: Color,
}

impl SectorPath {
    /// Flatten the command buffer into a [`BezPath`], approximating arcs
    /// with Béziers to the given tolerance.
    #[must_use]
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let mut path = BezPath::new();
        for cmd in &self.commands {
            match *cmd {
                PathCmd::MoveTo { x, y } => path.move_to((x, y)),
                PathCmd::LineTo { x, y } => path.line_to((x, y)),
                PathCmd::Arc {
                    cx,
                    cy,
                    radius,
                    start_degrees,
                    sweep_degrees,
                } => {
                    let arc = kurbo::Arc::new(
                        Point::new(cx, cy),
                        Vec2::new(radius, radius),
                        to_radians(start_degrees),
                        to_radians(sweep_degrees),
                        0.0,
                    );
                    for el in arc.append_iter(tolerance) {
                        path.push(el);
                    }
                }
                PathCmd::Close => path.close_path(),
            }
        }
        path
    }

    /// Total absolute angular sweep of this sector's arcs, in degrees.
    ///
    /// The outer and (when a hole is drawn) inner arc both contribute, so
    /// a plain wedge reports its sweep once and an annular sector twice.
    #[must_use]
    pub fn swept_degrees(&self) -> f64 {
        self.commands
            .iter()
            .map(|cmd| match cmd {
                PathCmd::Arc { sweep_degrees, .. } => sweep_degrees.abs(),
                _ => 0.0,
            })
            .sum()
    }
}

/// A rendered chart: one [`SectorPath`] per visible sector.
///
/// An empty model renders to an empty `ChartPaths`; consumers draw nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartPaths {
    /// Visible sectors in ascending bucket order.
    pub sectors: Vec<SectorPath>,
}

impl ChartPaths {
    /// Returns `true` if there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Shape;
    use peniko::Color;

    use super::{PathCmd, SectorPath};

    #[test]
    fn bez_path_conversion_follows_the_command_buffer() {
        let sector = SectorPath {
            bucket: 0,
            commands: vec![
                PathCmd::MoveTo { x: 10.0, y: 0.0 },
                PathCmd::Arc {
                    cx: 0.0,
                    cy: 0.0,
                    radius: 10.0,
                    start_degrees: 0.0,
                    sweep_degrees: 90.0,
                },
                PathCmd::LineTo { x: 0.0, y: 0.0 },
                PathCmd::Close,
            ]
            .into_boxed_slice(),
            fill: Color::WHITE,
        };

        let path = sector.to_bez_path(0.1);
        let bbox = path.bounding_box();
        // A quarter wedge of radius 10 about the origin, swept from the
        // +x axis towards +y.
        assert!(bbox.x0 >= -0.5 && bbox.x1 <= 10.5, "x bounds: {bbox:?}");
        assert!(bbox.y0 >= -0.5 && bbox.y1 <= 10.5, "y bounds: {bbox:?}");
        assert!(path.area().abs() > 0.0, "wedge must enclose area");
    }

    #[test]
    fn swept_degrees_sums_arc_magnitudes() {
        let sector = SectorPath {
            bucket: 3,
            commands: vec![
                PathCmd::MoveTo { x: 1.0, y: 0.0 },
                PathCmd::Arc {
                    cx: 0.0,
                    cy: 0.0,
                    radius: 1.0,
                    start_degrees: 0.0,
                    sweep_degrees: 5.0,
                },
                PathCmd::LineTo { x: 0.5, y: 0.0 },
                PathCmd::Arc {
                    cx: 0.0,
                    cy: 0.0,
                    radius: 0.5,
                    start_degrees: 5.0,
                    sweep_degrees: -5.0,
                },
                PathCmd::Close,
            ]
            .into_boxed_slice(),
            fill: Color::WHITE,
        };
        assert!((sector.swept_degrees() - 10.0).abs() < 1e-12);
    }
}
