// Copyright 2026 the Pluvio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pluvio Chart: radial precipitation chart rendering as vector paths.
//!
//! This crate consumes the sector model built by `pluvio_sectors` and
//! produces [`ChartPaths`]: one filled subpath per visible sector of an
//! annular/pie chart in which
//!
//! - the **outer radius** of each sector scales with its precipitation
//!   intensity,
//! - the **fill alpha** carries its precipitation probability, and
//! - adjacent visible sectors are separated by a configurable angular gap.
//!
//! It does **not** touch pixels. [`SectorPath`] is a small command buffer
//! ([`PathCmd`]) that a drawing surface can consume directly or flatten to
//! a [`kurbo::BezPath`] via [`SectorPath::to_bez_path`]. Rasterization,
//! animation timing, and interaction live with the caller.
//!
//! ## Coordinate convention
//!
//! Display space is y-down. Angle 0° points along the positive x-axis and
//! positive angles sweep **clockwise on screen**; a point at angle θ and
//! radius r is `center + r · (cos θ, sin θ)`. With the default rotation of
//! 270°, bucket 0 (minute 0 or the 12-hour mark) sits at 12 o'clock and
//! later buckets proceed clockwise, matching a clock face.
//!
//! ## Example
//!
//! ```rust
//! use pluvio_chart::{ChartGeometry, render};
//! use pluvio_sectors::{ChartModel, Granularity, SectorEntry};
//!
//! let model = ChartModel::from_sorted_entries(
//!     Granularity::Minutely,
//!     vec![
//!         SectorEntry { bucket: 0, intensity: 0.9, probability: 1.0 },
//!         SectorEntry { bucket: 30, intensity: 0.45, probability: 0.5 },
//!     ],
//! );
//! let geometry = ChartGeometry {
//!     base_radius: 100.0,
//!     slice_gap_degrees: 1.0,
//!     ..ChartGeometry::default()
//! };
//!
//! let paths = render(&model, &geometry).unwrap();
//! assert_eq!(paths.sectors.len(), 2);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod geometry;
mod path;
mod render;

pub use geometry::{ChartGeometry, GeometryError};
pub use path::{ChartPaths, PathCmd, SectorPath};
pub use render::{VISIBILITY_EPSILON, render};
