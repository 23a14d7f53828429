// Copyright 2026 the Pluvio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{NaiveDateTime, Timelike};

/// Calendar seam for extracting clock-face fields from timestamps.
///
/// The aggregator only ever needs two fields of a timestamp: which minute
/// of its hour and which hour of its day it falls in. Keeping that behind a
/// trait lets tests drive the aggregator with synthetic stamps and lets
/// embedders plug in whatever time representation their platform uses.
///
/// Implementations must return `minute_of_hour` in 0–59 and `hour_of_day`
/// in 0–23; out-of-range values are folded into bucket range by modulo.
pub trait BucketClock {
    /// Timestamp type this clock understands.
    type Stamp;

    /// Minute of the stamp's hour, 0–59.
    fn minute_of_hour(&self, stamp: &Self::Stamp) -> u32;

    /// Hour of the stamp's day, 0–23.
    fn hour_of_day(&self, stamp: &Self::Stamp) -> u32;
}

/// [`BucketClock`] for [`chrono::NaiveDateTime`] wall-clock timestamps.
///
/// Naive timestamps carry no timezone, which is exactly the contract here:
/// the caller converts to local wall-clock time before aggregation, and the
/// clock face is drawn in those terms.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WallClock;

impl BucketClock for WallClock {
    type Stamp = NaiveDateTime;

    #[inline]
    fn minute_of_hour(&self, stamp: &NaiveDateTime) -> u32 {
        stamp.minute()
    }

    #[inline]
    fn hour_of_day(&self, stamp: &NaiveDateTime) -> u32 {
        stamp.hour()
    }
}
