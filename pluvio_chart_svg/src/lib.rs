// Copyright 2026 the Pluvio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export for rendered Pluvio charts.
//!
//! This crate turns a [`ChartPaths`], the renderer's vector-path output,
//! into a standalone SVG document with one `<path>` element per visible
//! sector. It is intended for debugging and inspection, not pixel-perfect
//! rendering:
//!
//! - Arcs use the SVG endpoint parameterization; sweeps of a full turn
//!   cannot be represented and are not expected from the renderer
//!   (sectors sweep at most one bucket, 30°).
//! - Colors are emitted as `#rrggbb` plus `fill-opacity`, which is where
//!   each sector's precipitation probability shows up.
//!
//! ```rust
//! use pluvio_chart::{ChartGeometry, render};
//! use pluvio_chart_svg::chart_to_svg;
//! use pluvio_sectors::{ChartModel, Granularity, SectorEntry};
//!
//! let model = ChartModel::from_sorted_entries(
//!     Granularity::Hourly,
//!     vec![SectorEntry { bucket: 6, intensity: 0.5, probability: 0.75 }],
//! );
//! let geometry = ChartGeometry { base_radius: 100.0, ..ChartGeometry::default() };
//! let paths = render(&model, &geometry).unwrap();
//!
//! let svg = chart_to_svg(&paths, 320, 320);
//! assert!(svg.contains("<path"));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin`, `cos`
use peniko::Color;
use pluvio_chart::{ChartPaths, PathCmd, SectorPath};

/// Export a rendered chart as an SVG document.
///
/// `width`/`height` are used both as the SVG `width`/`height` attributes
/// and to set `viewBox="0 0 width height"`; the chart is emitted in the
/// display coordinates it was rendered with. An empty chart produces a
/// document with no `<path>` elements.
pub fn chart_to_svg(paths: &ChartPaths, width: u32, height: u32) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    for sector in &paths.sectors {
        let d = sector_to_svg_d(sector);
        let (rgb, alpha) = color_to_svg(sector.fill);
        let _ = write!(svg, "<path d=\"{d}\" fill=\"{rgb}\"");
        if alpha < 1.0 {
            let _ = write!(svg, " fill-opacity=\"{}\"", fmt_f64(f64::from(alpha)));
        }
        svg.push_str("/>");
    }
    svg.push_str("</svg>");
    svg
}

/// Path data (`d` attribute) for one sector.
///
/// Arc commands become `A` segments via the endpoint parameterization:
/// the sweep flag follows the sign of the sweep (positive sweeps run
/// clockwise on screen under the renderer's y-down convention) and the
/// large-arc flag is set for sweeps beyond a half turn.
pub fn sector_to_svg_d(sector: &SectorPath) -> String {
    let mut d = String::new();
    for cmd in &sector.commands {
        match *cmd {
            PathCmd::MoveTo { x, y } => {
                let _ = write!(d, "M{} {}", fmt_f64(x), fmt_f64(y));
            }
            PathCmd::LineTo { x, y } => {
                let _ = write!(d, "L{} {}", fmt_f64(x), fmt_f64(y));
            }
            PathCmd::Arc {
                cx,
                cy,
                radius,
                start_degrees,
                sweep_degrees,
            } => {
                let end = to_radians(start_degrees + sweep_degrees);
                let ex = cx + radius * end.cos();
                let ey = cy + radius * end.sin();
                let large_arc = i32::from(sweep_degrees.abs() > 180.0);
                let sweep_flag = i32::from(sweep_degrees > 0.0);
                let _ = write!(
                    d,
                    "A{r} {r} 0 {large_arc} {sweep_flag} {} {}",
                    fmt_f64(ex),
                    fmt_f64(ey),
                    r = fmt_f64(radius),
                );
            }
            PathCmd::Close => d.push('Z'),
        }
    }
    d
}

#[inline]
fn to_radians(degrees: f64) -> f64 {
    degrees * (core::f64::consts::PI / 180.0)
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn fmt_f64(v: f64) -> String {
    // Keep output readable and stable enough for debugging.
    if !v.is_finite() {
        return format!("{v}");
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "best-effort pretty formatting"
    )]
    let i = v as i64;
    let diff = (i as f64) - v;
    if diff > -1e-6 && diff < 1e-6 {
        return format!("{i}");
    }

    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
