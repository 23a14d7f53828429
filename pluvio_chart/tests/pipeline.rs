// Copyright 2026 the Pluvio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests across aggregation and rendering: forecast samples in,
//! sector paths out.

use chrono::{NaiveDate, NaiveDateTime};
use kurbo::Point;
use pluvio_chart::{ChartGeometry, PathCmd, render};
use pluvio_sectors::{Granularity, RawSample, WallClock, aggregate};

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 6, 1)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn sample(hour: u32, minute: u32, intensity: f32, probability: f32) -> RawSample<NaiveDateTime> {
    RawSample {
        stamp: at(hour, minute),
        intensity: Some(intensity),
        probability: Some(probability),
    }
}

fn display_geometry() -> ChartGeometry {
    ChartGeometry {
        center: Point::new(160.0, 160.0),
        base_radius: 150.0,
        slice_gap_degrees: 1.0,
        ..ChartGeometry::default()
    }
}

#[test]
fn empty_forecast_draws_nothing() {
    for granularity in [Granularity::Minutely, Granularity::Hourly] {
        let agg = aggregate(Vec::new(), granularity, &WallClock);
        let paths = render(&agg.model, &display_geometry()).unwrap();
        assert!(paths.is_empty(), "no samples must mean no paths");
    }
}

#[test]
fn a_wet_spell_renders_one_sector_per_rainy_minute() {
    // Rain from minute 10 through 19, dry elsewhere.
    let samples = (0_u32..60).map(|m| {
        let wet = (10..20).contains(&m);
        sample(14, m, if wet { 0.4 } else { 0.0 }, if wet { 0.85 } else { 0.0 })
    });
    let agg = aggregate(samples, Granularity::Minutely, &WallClock);
    let paths = render(&agg.model, &display_geometry()).unwrap();

    assert_eq!(paths.sectors.len(), 10);
    for (sector, minute) in paths.sectors.iter().zip(10_usize..20) {
        assert_eq!(sector.bucket, minute);

        // Slot angle follows the minute: 270° + minute · 6°, plus half of
        // the 1° gap.
        let expected_start = 270.0 + minute as f64 * 6.0 + 0.5;
        match sector.commands[1] {
            PathCmd::Arc {
                radius,
                start_degrees,
                sweep_degrees,
                ..
            } => {
                assert!((radius - 150.0 * 0.4).abs() < 1e-6);
                assert!((start_degrees - expected_start).abs() < 1e-9);
                assert!((sweep_degrees - 5.0).abs() < 1e-9);
            }
            ref other => panic!("expected outer arc, got {other:?}"),
        }

        let [_, _, _, alpha] = sector.fill.components;
        assert!((alpha - 0.85).abs() < 1e-6);
    }
}

#[test]
fn downpour_is_capped_on_screen_but_reported_raw() {
    let agg = aggregate(
        vec![sample(8, 0, 2.4, 1.0), sample(8, 1, 0.3, 0.9)],
        Granularity::Minutely,
        &WallClock,
    );
    assert!((agg.max_intensity - 2.4).abs() < 1e-6);

    let paths = render(&agg.model, &display_geometry()).unwrap();
    match paths.sectors[0].commands[1] {
        PathCmd::Arc { radius, .. } => {
            // Capped at the 0.9 ceiling: the sector cannot overshoot the
            // face even though the raw intensity was 2.4.
            assert!((radius - 150.0 * 0.9).abs() < 1e-6);
        }
        ref other => panic!("expected outer arc, got {other:?}"),
    }
}

#[test]
fn hourly_forecast_occupies_the_twelve_hour_face() {
    let samples = vec![
        sample(0, 30, 0.5, 1.0),  // midnight → 12-o'clock bucket
        sample(15, 0, 0.2, 0.6),  // 15:00 → 3-o'clock bucket
        sample(23, 45, 0.7, 0.9), // 23:00 → 11-o'clock bucket
    ];
    let agg = aggregate(samples, Granularity::Hourly, &WallClock);
    let paths = render(&agg.model, &display_geometry()).unwrap();

    let buckets: Vec<usize> = paths.sectors.iter().map(|s| s.bucket).collect();
    assert_eq!(buckets, vec![0, 3, 11]);

    // Hourly slices are 30° wide; bucket 3 starts a quarter turn past the
    // rotation offset.
    match paths.sectors[1].commands[1] {
        PathCmd::Arc { start_degrees, .. } => {
            assert!((start_degrees - (270.0 + 3.0 * 30.0 + 0.5)).abs() < 1e-9);
        }
        ref other => panic!("expected outer arc, got {other:?}"),
    }
}

#[test]
fn annular_display_keeps_the_hole_open() {
    let samples = (0_u32..12).map(|h| sample(h, 0, 0.6, 1.0));
    let agg = aggregate(samples, Granularity::Hourly, &WallClock);

    let geometry = ChartGeometry {
        inner_hole: true,
        hole_radius_fraction: 0.3,
        ..display_geometry()
    };
    let paths = render(&agg.model, &geometry).unwrap();
    assert_eq!(paths.sectors.len(), 12);

    for sector in &paths.sectors {
        let inner = match sector.commands[3] {
            PathCmd::Arc { radius, .. } => radius,
            ref other => panic!("expected inner arc, got {other:?}"),
        };
        assert!(inner >= 150.0 * 0.3 - 1e-9, "hole must stay open");
        let outer = match sector.commands[1] {
            PathCmd::Arc { radius, .. } => radius,
            ref other => panic!("expected outer arc, got {other:?}"),
        };
        assert!(inner <= outer + 1e-9);
    }
}

#[test]
fn sector_paths_flatten_into_drawable_bezier_outlines() {
    let agg = aggregate(
        vec![sample(9, 0, 0.9, 1.0), sample(9, 30, 0.5, 0.5)],
        Granularity::Minutely,
        &WallClock,
    );
    let paths = render(&agg.model, &display_geometry()).unwrap();

    for sector in &paths.sectors {
        let bez = sector.to_bez_path(0.1);
        assert!(
            !bez.elements().is_empty(),
            "flattened path must carry segments"
        );
    }
}
