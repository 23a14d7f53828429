// Copyright 2026 the Pluvio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pluvio Sectors: forecast samples → circular chart buckets.
//!
//! This crate turns an ordered sequence of time-stamped precipitation
//! samples into the fixed-size sector model consumed by `pluvio_chart`. It
//! sits between a forecast data source (out of scope; any provider that
//! yields per-minute or per-hour samples will do) and the renderer:
//!
//! - **Input**: [`RawSample`]s with a wall-clock timestamp, an optional
//!   precipitation intensity, and an optional probability.
//! - **Output**: a [`ChartModel`] of [`SectorEntry`]s, one per populated
//!   angular bucket (60 minute buckets or 12 hour buckets), sorted by
//!   bucket index, plus the maximum raw intensity seen for diagnostics.
//!
//! Calendar extraction goes through the [`BucketClock`] seam; [`WallClock`]
//! implements it for [`chrono::NaiveDateTime`]. Timezone handling is the
//! caller's responsibility: timestamps are assumed to already be in the
//! local wall-clock terms of the clock face being drawn.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pluvio_sectors::{Granularity, RawSample, WallClock, aggregate};
//!
//! let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
//! let samples = (0..3).map(|m| RawSample {
//!     stamp: day.and_hms_opt(9, m, 0).unwrap(),
//!     intensity: Some(0.2 * (m as f32 + 1.0)),
//!     probability: Some(0.8),
//! });
//!
//! let agg = aggregate(samples, Granularity::Minutely, &WallClock);
//! assert_eq!(agg.model.entries().len(), 3);
//! assert!((agg.max_intensity - 0.6).abs() < 1e-6);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod aggregate;
mod clock;
mod model;

pub use aggregate::{Aggregation, INTENSITY_CEILING, aggregate};
pub use clock::{BucketClock, WallClock};
pub use model::{ChartModel, Granularity, RawSample, SectorEntry};
