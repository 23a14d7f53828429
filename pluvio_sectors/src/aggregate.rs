// Copyright 2026 the Pluvio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::clock::BucketClock;
use crate::model::{ChartModel, Granularity, RawSample, SectorEntry};

/// Visual ceiling for stored sector intensities.
///
/// Intensities above this are clipped before they reach the renderer so a
/// cloudburst cannot push a sector past the chart's base radius. The true
/// pre-cap maximum is still reported via [`Aggregation::max_intensity`].
pub const INTENSITY_CEILING: f32 = 0.9;

/// Result of one aggregation pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Aggregation {
    /// The chart model: populated sectors sorted by bucket index.
    pub model: ChartModel,
    /// Maximum *raw* intensity across accepted samples, before the
    /// [`INTENSITY_CEILING`] cap. Diagnostic only; zero for empty input.
    pub max_intensity: f32,
}

/// Aggregate forecast samples into a chart model.
///
/// Samples are accepted in arrival order until `granularity.bucket_count()`
/// of them have been taken; the rest are ignored. Input ordering is **not**
/// validated and buckets are **not** deduplicated: this is first-N
/// truncation, not per-bucket selection, preserved from the original
/// behavior. A feed that delivers samples out of chronological order will
/// therefore have later samples dropped even when their buckets are empty.
///
/// For each accepted sample, missing intensity/probability default to 0,
/// negative intensities are treated as 0, probability is clamped to [0, 1],
/// and the stored intensity is capped at [`INTENSITY_CEILING`]. Entries are
/// then stable-sorted by bucket index (arrival order breaks ties).
///
/// Empty input yields an empty model, a valid chart with nothing to draw,
/// not an error.
pub fn aggregate<C, I>(samples: I, granularity: Granularity, clock: &C) -> Aggregation
where
    C: BucketClock,
    I: IntoIterator<Item = RawSample<C::Stamp>>,
{
    let bucket_count = granularity.bucket_count();
    let mut entries = Vec::with_capacity(bucket_count);
    let mut max_intensity = 0.0_f32;

    for sample in samples.into_iter().take(bucket_count) {
        let bucket = granularity.bucket_index(clock, &sample.stamp);
        let raw_intensity = sample.intensity.unwrap_or(0.0).max(0.0);
        let probability = sample.probability.unwrap_or(0.0).clamp(0.0, 1.0);

        if raw_intensity > max_intensity {
            max_intensity = raw_intensity;
        }

        entries.push(SectorEntry {
            bucket,
            intensity: raw_intensity.min(INTENSITY_CEILING),
            probability,
        });
    }

    entries.sort_by_key(|entry| entry.bucket);

    Aggregation {
        model: ChartModel::from_sorted_entries(granularity, entries),
        max_intensity,
    }
}
