// Copyright 2026 the Pluvio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// An RGB color with channels in the 0–255 range.
///
/// Channels are `f32` rather than `u8` because interpolated colors land
/// between integer values; conversion to a normalized display color happens
/// at the edge via [`Rgb::to_color`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgb {
    /// Red channel in [0, 255].
    pub r: f32,
    /// Green channel in [0, 255].
    pub g: f32,
    /// Blue channel in [0, 255].
    pub b: f32,
}

impl Rgb {
    /// Create a color from 0–255 channel values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert to a normalized, fully opaque display color.
    #[inline]
    pub fn to_color(self) -> Color {
        Color::new([self.r / 255.0, self.g / 255.0, self.b / 255.0, 1.0])
    }
}

/// One control point of a temperature gradient.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorStop {
    /// Temperature at which this stop's color applies exactly, in °C.
    pub temperature: f32,
    /// Color of the stop.
    pub color: Rgb,
}

impl ColorStop {
    /// Create a stop from a temperature and 0–255 channel values.
    #[inline]
    pub const fn new(temperature: f32, r: f32, g: f32, b: f32) -> Self {
        Self {
            temperature,
            color: Rgb::new(r, g, b),
        }
    }
}

/// The reference mapping: deep blue at −30 °C through cyan and teal around
/// freezing into orange and red at 50 °C.
///
/// [`GradientTable::default`](crate::GradientTable::default) is built from
/// this table.
pub const REFERENCE_STOPS: [ColorStop; 7] = [
    ColorStop::new(-30.0, 38.0, 84.0, 114.0),
    ColorStop::new(-7.0, 75.0, 168.0, 231.0),
    ColorStop::new(0.0, 115.0, 209.0, 239.0),
    ColorStop::new(5.0, 67.0, 205.0, 187.0),
    ColorStop::new(18.0, 251.0, 171.0, 48.0),
    ColorStop::new(27.0, 244.0, 119.0, 25.0),
    ColorStop::new(50.0, 254.0, 81.0, 12.0),
];
