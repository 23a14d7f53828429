// Copyright 2026 the Pluvio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use crate::stops::{ColorStop, REFERENCE_STOPS, Rgb};

/// Error returned when a gradient table cannot be constructed.
///
/// Table validation happens once, at construction; lookups are total.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GradientError {
    /// Fewer than two stops were supplied, so there is nothing to
    /// interpolate between.
    TooFewStops,
    /// An adjacent pair of stops has descending temperatures.
    ///
    /// Equal adjacent temperatures are tolerated (see
    /// [`GradientTable::color_for_temperature`]); descending ones are a
    /// configuration error.
    NotAscending,
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewStops => write!(f, "gradient table needs at least two color stops"),
            Self::NotAscending => write!(f, "gradient stops must ascend by temperature"),
        }
    }
}

impl core::error::Error for GradientError {}

/// An immutable, validated temperature gradient.
///
/// Stops ascend by temperature; the table has at least two of them. Lookups
/// borrow `&self` only, so a table can be shared freely across threads.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientTable {
    stops: Vec<ColorStop>,
}

impl GradientTable {
    /// Build a table from an ordered stop sequence.
    ///
    /// Returns [`GradientError::TooFewStops`] for fewer than two stops and
    /// [`GradientError::NotAscending`] if any adjacent pair descends in
    /// temperature.
    pub fn new(stops: impl Into<Vec<ColorStop>>) -> Result<Self, GradientError> {
        let stops = stops.into();
        if stops.len() < 2 {
            return Err(GradientError::TooFewStops);
        }
        if stops.windows(2).any(|w| w[1].temperature < w[0].temperature) {
            return Err(GradientError::NotAscending);
        }
        Ok(Self { stops })
    }

    /// Returns the configured stops, ascending by temperature.
    #[must_use]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Map a temperature in °C to a color.
    ///
    /// Temperatures at or below the first stop return the first stop's
    /// color, temperatures at or above the last stop return the last
    /// stop's color (flat clamping, no extrapolation). In between, each
    /// channel is interpolated linearly across the enclosing stop pair.
    ///
    /// A degenerate pair of stops sharing one temperature returns the
    /// upper stop's color rather than dividing by zero.
    #[must_use]
    pub fn color_for_temperature(&self, temperature: f32) -> Rgb {
        let first = self.stops[0];
        if temperature <= first.temperature {
            return first.color;
        }
        let last = self.stops[self.stops.len() - 1];
        if temperature >= last.temperature {
            return last.color;
        }

        // Invariant from `new`: stops ascend, and `temperature` lies strictly
        // inside the table, so an enclosing pair exists.
        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if temperature > hi.temperature {
                continue;
            }
            let span = hi.temperature - lo.temperature;
            if span <= 0.0 {
                return hi.color;
            }
            let t = (temperature - lo.temperature) / span;
            return Rgb::new(
                lo.color.r + (hi.color.r - lo.color.r) * t,
                lo.color.g + (hi.color.g - lo.color.g) * t,
                lo.color.b + (hi.color.b - lo.color.b) * t,
            );
        }
        // Unreachable given the clamps above; keep the last stop as a
        // conservative fallback rather than panicking.
        last.color
    }
}

impl Default for GradientTable {
    /// The reference −30 °C to 50 °C mapping ([`REFERENCE_STOPS`]).
    fn default() -> Self {
        Self {
            stops: REFERENCE_STOPS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{GradientError, GradientTable};
    use crate::stops::{ColorStop, REFERENCE_STOPS, Rgb};

    fn assert_rgb_close(actual: Rgb, expected: Rgb) {
        assert!(
            (actual.r - expected.r).abs() < 1e-3
                && (actual.g - expected.g).abs() < 1e-3
                && (actual.b - expected.b).abs() < 1e-3,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn rejects_tables_without_an_interpolation_pair() {
        assert_eq!(
            GradientTable::new(vec![]).unwrap_err(),
            GradientError::TooFewStops
        );
        assert_eq!(
            GradientTable::new(vec![ColorStop::new(0.0, 1.0, 2.0, 3.0)]).unwrap_err(),
            GradientError::TooFewStops
        );
    }

    #[test]
    fn rejects_descending_stops() {
        let stops = vec![
            ColorStop::new(10.0, 0.0, 0.0, 0.0),
            ColorStop::new(-10.0, 255.0, 255.0, 255.0),
        ];
        assert_eq!(
            GradientTable::new(stops).unwrap_err(),
            GradientError::NotAscending
        );
    }

    #[test]
    fn stop_temperatures_map_to_their_exact_colors() {
        let table = GradientTable::default();
        for stop in REFERENCE_STOPS {
            assert_rgb_close(table.color_for_temperature(stop.temperature), stop.color);
        }
    }

    #[test]
    fn clamps_flat_beyond_both_ends() {
        let table = GradientTable::default();
        let coldest = REFERENCE_STOPS[0].color;
        let hottest = REFERENCE_STOPS[REFERENCE_STOPS.len() - 1].color;
        assert_rgb_close(table.color_for_temperature(-273.15), coldest);
        assert_rgb_close(table.color_for_temperature(-30.0001), coldest);
        assert_rgb_close(table.color_for_temperature(50.0001), hottest);
        assert_rgb_close(table.color_for_temperature(1000.0), hottest);
    }

    #[test]
    fn midpoint_between_stops_interpolates_each_channel() {
        // Scenario: three stops, query at the exact midpoint of the first
        // segment. r = 38 + (115 − 38) · 15/30 = 76.5, and likewise for g/b.
        let table = GradientTable::new(vec![
            ColorStop::new(-30.0, 38.0, 84.0, 114.0),
            ColorStop::new(0.0, 115.0, 209.0, 239.0),
            ColorStop::new(50.0, 254.0, 81.0, 12.0),
        ])
        .unwrap();
        assert_rgb_close(
            table.color_for_temperature(-15.0),
            Rgb::new(76.5, 146.5, 176.5),
        );
    }

    #[test]
    fn channels_stay_monotonic_within_a_segment() {
        let table = GradientTable::default();
        // Between −7 °C and 0 °C every reference channel increases.
        let mut prev = table.color_for_temperature(-7.0);
        for step in 1..=20 {
            let t = -7.0 + 7.0 * (step as f32) / 20.0;
            let cur = table.color_for_temperature(t);
            assert!(cur.r >= prev.r - 1e-4, "red regressed at {t}");
            assert!(cur.g >= prev.g - 1e-4, "green regressed at {t}");
            assert!(cur.b >= prev.b - 1e-4, "blue regressed at {t}");
            prev = cur;
        }
    }

    #[test]
    fn tolerates_equal_temperature_stop_pairs() {
        let table = GradientTable::new(vec![
            ColorStop::new(0.0, 10.0, 10.0, 10.0),
            ColorStop::new(10.0, 0.0, 0.0, 0.0),
            ColorStop::new(10.0, 200.0, 200.0, 200.0),
            ColorStop::new(20.0, 100.0, 100.0, 100.0),
        ])
        .unwrap();
        // At the shared temperature the scan resolves through the segment
        // ending there; no division by the zero-width span happens.
        assert_rgb_close(table.color_for_temperature(10.0), Rgb::new(0.0, 0.0, 0.0));
        // Past it, interpolation continues from the upper twin.
        assert_rgb_close(
            table.color_for_temperature(15.0),
            Rgb::new(150.0, 150.0, 150.0),
        );
    }
}
