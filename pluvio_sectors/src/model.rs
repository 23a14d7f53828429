// Copyright 2026 the Pluvio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::clock::BucketClock;

/// Angular resolution of the chart: one bucket per minute or per hour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// 60 buckets, one per minute of the hour; 6° per bucket.
    Minutely,
    /// 12 buckets, one per hour of the half-day; 30° per bucket.
    Hourly,
}

impl Granularity {
    /// Number of angular buckets on the clock face.
    #[must_use]
    pub const fn bucket_count(self) -> usize {
        match self {
            Self::Minutely => 60,
            Self::Hourly => 12,
        }
    }

    /// Angular width of one bucket, in degrees (360 / bucket count).
    #[must_use]
    pub const fn slice_angle_degrees(self) -> f64 {
        match self {
            Self::Minutely => 6.0,
            Self::Hourly => 30.0,
        }
    }

    /// Bucket index of a timestamp under this granularity.
    ///
    /// Minutely buckets follow the minute of the hour. Hourly buckets fold
    /// the 24-hour day onto a 12-hour face, so hour 0 and hour 12 both land
    /// on bucket 0, the 12-o'clock position.
    pub fn bucket_index<C: BucketClock>(self, clock: &C, stamp: &C::Stamp) -> usize {
        let index = match self {
            Self::Minutely => clock.minute_of_hour(stamp) % 60,
            Self::Hourly => clock.hour_of_day(stamp) % 12,
        };
        index as usize
    }
}

/// One forecast data point as supplied by the data source.
///
/// Missing intensity or probability (providers omit fields for dry
/// minutes) defaults to zero during aggregation. Samples are consumed once
/// and not retained.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RawSample<S> {
    /// Wall-clock timestamp of the sample.
    pub stamp: S,
    /// Precipitation intensity, ≥ 0 when present.
    pub intensity: Option<f32>,
    /// Precipitation probability in [0, 1] when present.
    pub probability: Option<f32>,
}

/// One populated sector of the chart model.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SectorEntry {
    /// Bucket index, `0..bucket_count`.
    pub bucket: usize,
    /// Capped precipitation intensity in [0, 0.9]; scales the sector's
    /// outer radius.
    pub intensity: f32,
    /// Precipitation probability in [0, 1]; becomes the sector's fill
    /// alpha.
    pub probability: f32,
}

/// The aggregated chart model: populated sectors sorted by bucket index.
///
/// Models are immutable once built and rebuilt wholesale on each forecast
/// refresh; there is no incremental update path. Buckets without a sample
/// simply have no entry; the renderer leaves their angular slot empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartModel {
    granularity: Granularity,
    entries: Vec<SectorEntry>,
}

impl ChartModel {
    /// Assemble a model from already-sorted entries.
    ///
    /// Callers normally go through [`aggregate`](crate::aggregate); this
    /// constructor exists for tests and for synthetic models. Entries must
    /// be sorted ascending by bucket with indices below
    /// `granularity.bucket_count()`; this is debug-asserted, not validated.
    #[must_use]
    pub fn from_sorted_entries(granularity: Granularity, entries: Vec<SectorEntry>) -> Self {
        debug_assert!(
            entries.windows(2).all(|w| w[0].bucket <= w[1].bucket),
            "entries must be sorted by bucket"
        );
        debug_assert!(
            entries
                .iter()
                .all(|e| e.bucket < granularity.bucket_count()),
            "bucket index out of range"
        );
        Self {
            granularity,
            entries,
        }
    }

    /// The granularity this model was aggregated under.
    #[must_use]
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Populated sectors, ascending by bucket index.
    #[must_use]
    pub fn entries(&self) -> &[SectorEntry] {
        &self.entries
    }

    /// Returns `true` if no sector is populated (a valid empty chart).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of angular buckets on the face.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.granularity.bucket_count()
    }

    /// Angular width of one bucket, in degrees.
    #[must_use]
    pub fn slice_angle_degrees(&self) -> f64 {
        self.granularity.slice_angle_degrees()
    }
}
