//!
//! The chart rendering tests.
//!

use std::collections::BTreeMap;

use image::GenericImageView;
use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::input::Report;
use crate::model::chart::Chart;
use crate::util::thousands;

use super::canvas::Canvas;
use super::figure::Figure;
use super::fonts;
use super::Renderer;
use super::BAR_COLOR;

fn report(entries: &[(&str, u64)]) -> Report {
    Report {
        cycle_tracker_results: entries
            .iter()
            .map(|(label, count)| (label.to_string(), *count))
            .collect::<BTreeMap<String, u64>>(),
        total_blobs: Some(3),
        total_tx_count: Some(1_520),
        total_gas: 123_456_789,
        total_instruction_count: 987_654_321,
        total_syscall_count: 4_242,
        ..Default::default()
    }
}

fn renderer() -> Renderer {
    Renderer::new(Figure::with_dpi(72))
}

/// Draws the chart and returns, for every row containing bar pixels, the rightmost bar pixel.
fn bar_extents(chart: &Chart) -> Vec<u32> {
    fonts::register().expect("Always valid");
    let renderer = renderer();
    let mut canvas = Canvas::new(renderer.figure.canvas_size(chart.summary.lines.len()));
    {
        let root = canvas.backend().into_drawing_area();
        renderer.draw(chart, &root).expect("Always valid");
        root.present().expect("Always valid");
    }

    let (width, height) = canvas.size();
    let bar = [BAR_COLOR.0, BAR_COLOR.1, BAR_COLOR.2];
    (0..height)
        .filter_map(|y| {
            (0..width)
                .rev()
                .find(|x| canvas.pixel(*x, y) == Some(bar))
        })
        .collect()
}

#[test]
fn bars_descend_from_top() {
    let chart = Chart::new(
        "ev-exec.json",
        &report(&[
            ("commit", 60_000),
            ("execute", 100_000),
            ("prove", 20_000),
            ("verify", 80_000),
        ]),
    );

    let extents = bar_extents(&chart);

    assert!(
        extents.windows(2).all(|pair| pair[0] >= pair[1]),
        "bar extents from top to bottom: {extents:?}"
    );
    let mut distinct = extents.clone();
    distinct.dedup();
    assert_eq!(distinct.len(), 4);
}

#[test]
fn unit_axis_tick_labels_are_distinct() {
    let labels: Vec<String> = RangedCoordf64::from(0f64..1f64)
        .key_points(10)
        .into_iter()
        .map(thousands::format_decimal)
        .collect();

    let mut distinct = labels.clone();
    distinct.dedup();
    assert!(labels.len() > 2);
    assert_eq!(distinct, labels);
    assert_eq!(labels.first().map(String::as_str), Some("0"));
}

#[test]
fn empty_breakdown_has_no_bars() {
    let chart = Chart::new("ev-exec.json", &report(&[]));

    assert!(bar_extents(&chart).is_empty());
}

#[test]
fn writes_png() {
    let directory = tempfile::tempdir().expect("Always valid");
    let path = directory.path().join("ev-exec.png");
    let chart = Chart::new(
        "ev-exec.json",
        &report(&[("execute", 98_000_000), ("verify", 1_200_000), ("commit", 5_000)]),
    );

    renderer().render(&chart, &path).expect("Always valid");

    let image = image::open(&path).expect("Always valid");
    let (width, height) = image.dimensions();
    let (canvas_width, canvas_height) = renderer().figure.canvas_size(chart.summary.lines.len());
    assert!(width > 0 && width <= canvas_width);
    assert!(height > 0 && height <= canvas_height);
}

#[test]
fn writes_png_for_empty_breakdown() {
    let directory = tempfile::tempdir().expect("Always valid");
    let path = directory.path().join("empty.png");
    let chart = Chart::new("empty.json", &report(&[]));

    renderer().render(&chart, &path).expect("Always valid");

    assert!(path.is_file());
}

#[test]
fn overwrites_existing_file() {
    let directory = tempfile::tempdir().expect("Always valid");
    let path = directory.path().join("ev-exec.png");
    std::fs::write(&path, b"stale").expect("Always valid");
    let chart = Chart::new("ev-exec.json", &report(&[("execute", 10)]));

    renderer().render(&chart, &path).expect("Always valid");

    image::open(&path).expect("Always valid");
}

#[test]
fn error_unwritable_path() {
    let directory = tempfile::tempdir().expect("Always valid");
    let path = directory.path().join("missing").join("ev-exec.png");
    let chart = Chart::new("ev-exec.json", &report(&[("execute", 10)]));

    let result = renderer().render(&chart, &path);

    assert!(matches!(
        result,
        Err(super::error::Error::Saving { .. })
    ));
    assert!(!path.exists());
}
