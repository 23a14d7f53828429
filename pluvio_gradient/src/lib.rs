// Copyright 2026 the Pluvio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pluvio Gradient: temperature → color mapping for weather displays.
//!
//! This crate maps a scalar temperature to an RGB color by piecewise-linear
//! interpolation over an ordered table of [`ColorStop`]s. It is the leaf of
//! the Pluvio pipeline and knows nothing about clocks or geometry: callers
//! feed it a temperature and use the resulting color however they like (the
//! reference application tints its background with it).
//!
//! The table is an explicitly owned, validated value rather than process-wide
//! static configuration, so independently configured gradients (for testing,
//! for theming) can coexist without shared state.
//!
//! ## Example
//!
//! ```rust
//! use pluvio_gradient::GradientTable;
//!
//! // The reference mapping covers −30 °C to 50 °C.
//! let table = GradientTable::default();
//!
//! // Between two stops, each channel is interpolated linearly.
//! let mild = table.color_for_temperature(12.0);
//!
//! // Beyond the table, the nearest stop's color is returned unchanged.
//! let arctic = table.color_for_temperature(-80.0);
//! assert_eq!(arctic, table.stops()[0].color);
//! # let _ = mild;
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod stops;
mod table;

pub use stops::{ColorStop, REFERENCE_STOPS, Rgb};
pub use table::{GradientError, GradientTable};
