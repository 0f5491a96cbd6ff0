// Copyright 2025 the plotgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Line, Point};
use peniko::color::palette::css;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use crate::{
    AxisScale, BOUNDARY_STROKE_WIDTH, DrawInstruction, Font, GridLine, GridSpec, ScaleLinear,
    TickLabel,
};

/// A scale with arbitrary bound lists, for exercising undefined bounds.
#[derive(Debug)]
struct RawScale {
    domain: Vec<f64>,
    range: Vec<f64>,
}

impl AxisScale for RawScale {
    fn map(&self, value: f64) -> f64 {
        value
    }

    fn domain(&self) -> &[f64] {
        &self.domain
    }

    fn range(&self) -> &[f64] {
        &self.range
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        (0..count).map(|i| i as f64).collect()
    }
}

fn lines(out: &[DrawInstruction]) -> Vec<GridLine> {
    out.iter().filter_map(DrawInstruction::as_line).copied().collect()
}

fn labels(out: &[DrawInstruction]) -> Vec<TickLabel> {
    out.iter().filter_map(DrawInstruction::as_label).cloned().collect()
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

/// x: `[0, 10]` onto `[0, 300]`, y: `[0, 100]` onto `[220, 20]`.
fn example_scales() -> (ScaleLinear, ScaleLinear) {
    (
        ScaleLinear::new((0.0, 10.0), (0.0, 300.0)),
        ScaleLinear::new((0.0, 100.0), (220.0, 20.0)),
    )
}

#[test]
fn example_grid_places_lines_and_drops_overflowing_label() {
    let (x, y) = example_scales();
    let font = Font::heuristic(12.0);
    let spec = GridSpec::new().with_x_ticks(2).with_y_ticks(2);
    let out = spec.render(&x, &y, Some(&font));

    let lines = lines(&out);
    assert_eq!(lines.len(), 3 + 3 + 1);

    let vertical_x: Vec<f64> = lines[..3].iter().map(|l| l.line.p0.x).collect();
    assert_eq!(vertical_x, vec![0.0, 150.0, 300.0]);
    for l in &lines[..3] {
        assert_eq!(l.line.p0.y, 20.0);
        assert_eq!(l.line.p1.y, 220.0);
        assert_eq!(l.line.p0.x, l.line.p1.x);
    }

    // x labels hang one font size below the top edge.
    let x_labels: Vec<_> = labels(&out)
        .into_iter()
        .filter(|l| (l.pos.y - 32.0).abs() < 1e-9)
        .map(|l| l.text)
        .collect();
    assert!(x_labels.contains(&"0".into()), "{x_labels:?}");
    assert!(x_labels.contains(&"5".into()), "{x_labels:?}");
    assert!(!x_labels.contains(&"10".into()), "{x_labels:?}");
}

#[test]
fn x_label_sits_centered_under_its_tick() {
    let (x, y) = example_scales();
    let font = Font::heuristic(10.0);
    let spec = GridSpec::new()
        .with_x_ticks(2)
        .with_y_ticks(0)
        .with_label_offset(4.0);
    let out = spec.render(&x, &y, Some(&font));

    // Line for 0, label for 0, line for 5, label for 5, line for 10, boundary.
    assert_eq!(out.len(), 6);
    let DrawInstruction::Label(five) = &out[3] else {
        panic!("expected the label for tick 5, got {:?}", out[3]);
    };
    assert_eq!(five.text, "5");
    // "5" is 6px wide at 10px.
    assert_close(five.pos.x, 150.0 - 3.0);
    assert_close(five.pos.y, 20.0 + 4.0 + 10.0);
    assert_eq!(five.font, font);
}

#[test]
fn y_labels_right_align_against_the_plot() {
    let x = ScaleLinear::new((0.0, 10.0), (50.0, 300.0));
    let y = ScaleLinear::new((0.0, 100.0), (220.0, 20.0));
    let font = Font::heuristic(12.0);
    let spec = GridSpec::new()
        .with_x_ticks(0)
        .with_y_ticks(2)
        .with_label_offset(5.0);
    let out = spec.render(&x, &y, Some(&font));

    let labels = labels(&out);
    let texts: Vec<&str> = labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["0", "50", "100"]);
    for l in &labels {
        let width = font.text_width(&l.text);
        assert_close(l.pos.x + width + 5.0, 50.0);
    }
    assert_close(labels[1].pos.y, 120.0 + 4.0);
}

#[test]
fn y_label_touching_top_edge_is_dropped() {
    let x = ScaleLinear::new((0.0, 10.0), (50.0, 300.0));
    let y = ScaleLinear::new((0.0, 100.0), (205.0, 5.0));
    let font = Font::heuristic(12.0);
    let out = GridSpec::new()
        .with_x_ticks(0)
        .with_y_ticks(2)
        .render(&x, &y, Some(&font));

    let texts: Vec<_> = labels(&out).into_iter().map(|l| l.text).collect();
    // The "100" baseline would be at 5 + 4 = 9, above the 12px font size.
    assert_eq!(texts, vec!["0", "50"]);
    assert_eq!(lines(&out).len(), 3 + 1);
}

#[test]
fn instructions_follow_paint_order() {
    let (x, y) = example_scales();
    let font = Font::heuristic(12.0);
    let out = GridSpec::new()
        .with_x_ticks(2)
        .with_y_ticks(2)
        .render(&x, &y, Some(&font));

    let last = out.last().and_then(DrawInstruction::as_line).copied();
    assert_eq!(last.map(|l| l.stroke_width), Some(BOUNDARY_STROKE_WIDTH));

    let first_horizontal = out
        .iter()
        .position(|d| d.as_line().is_some_and(|l| l.line.p0.y == l.line.p1.y))
        .unwrap();
    for d in &out[..first_horizontal] {
        if let DrawInstruction::Line(l) = d {
            assert_eq!(l.line.p0.x, l.line.p1.x, "vertical lines come first");
        }
    }
    for d in &out[first_horizontal..] {
        if let DrawInstruction::Line(l) = d {
            assert_eq!(l.line.p0.y, l.line.p1.y, "then horizontal lines");
        }
    }
}

#[test]
fn undefined_bounds_render_nothing() {
    let ok = || RawScale {
        domain: vec![0.0, 10.0],
        range: vec![0.0, 100.0],
    };
    let font = Font::heuristic(12.0);
    let spec = GridSpec::new();
    assert!(!spec.render(&ok(), &ok(), Some(&font)).is_empty());

    let short_domain = RawScale {
        domain: vec![0.0],
        ..ok()
    };
    assert!(spec.render(&short_domain, &ok(), Some(&font)).is_empty());
    assert!(spec.render(&ok(), &short_domain, Some(&font)).is_empty());

    let short_range = RawScale {
        range: vec![0.0],
        ..ok()
    };
    assert!(spec.render(&short_range, &ok(), Some(&font)).is_empty());
    // Only the x range's end is read.
    assert!(!spec.render(&ok(), &short_range, Some(&font)).is_empty());

    let nan_domain = RawScale {
        domain: vec![0.0, f64::NAN],
        ..ok()
    };
    assert!(spec.render(&ok(), &nan_domain, None).is_empty());

    let empty = RawScale {
        domain: Vec::new(),
        range: Vec::new(),
    };
    assert!(spec.render(&empty, &empty, None).is_empty());
}

#[test]
fn zero_width_labels_are_never_drawn_on_x() {
    let (x, y) = example_scales();
    let font = Font::heuristic(12.0);
    let out = GridSpec::new()
        .with_x_ticks(2)
        .with_y_ticks(0)
        .with_x_formatter(|_| alloc::string::String::new())
        .render(&x, &y, Some(&font));
    assert!(labels(&out).is_empty());
    assert_eq!(lines(&out).len(), 3 + 1);
}

#[test]
fn boundary_line_runs_along_the_top() {
    let (x, y) = example_scales();
    let spec = GridSpec::new().with_axis_color(css::RED);
    let out = spec.render(&x, &y, None);
    let Some(DrawInstruction::Line(boundary)) = out.last() else {
        panic!("missing boundary line");
    };
    assert_eq!(
        boundary.line,
        Line::new(Point::new(0.0, 20.0), Point::new(300.0, 20.0))
    );
    assert_eq!(boundary.color.components, css::RED.components);
    assert_eq!(boundary.stroke_width, 2.0);
}

fn scales_from(
    (xd0, xd1, xr1): (i16, i16, i16),
    (yd0, yd1, yr0): (i16, i16, i16),
) -> (ScaleLinear, ScaleLinear) {
    (
        ScaleLinear::new((xd0.into(), xd1.into()), (0.0, xr1.into())),
        ScaleLinear::new((yd0.into(), yd1.into()), (yr0.into(), 0.0)),
    )
}

#[quickcheck]
fn line_count_matches_tick_counts(
    xs: (i16, i16, i16),
    ys: (i16, i16, i16),
    x_ticks: u8,
    y_ticks: u8,
) -> bool {
    let (x, y) = scales_from(xs, ys);
    let (x_ticks, y_ticks) = (usize::from(x_ticks % 24), usize::from(y_ticks % 24));
    let spec = GridSpec::new().with_x_ticks(x_ticks).with_y_ticks(y_ticks);
    let font = Font::heuristic(11.0);

    let expected = x.ticks(x_ticks).len() + y.ticks(y_ticks).len() + 1;
    let with_font = spec.render(&x, &y, Some(&font));
    let without_font = spec.render(&x, &y, None);

    lines(&with_font).len() == expected
        && without_font.len() == expected
        && labels(&without_font).is_empty()
        && lines(&with_font) == lines(&without_font)
}

#[quickcheck]
fn boundary_ignores_tick_counts(xs: (i16, i16, i16), ys: (i16, i16, i16), ticks: u8) -> bool {
    let (x, y) = scales_from(xs, ys);
    let spec = GridSpec::new()
        .with_x_ticks(usize::from(ticks % 24))
        .with_y_ticks(usize::from(ticks % 7));
    let out = spec.render(&x, &y, None);
    let expected = Line::new(
        Point::new(x.map(xs.0.into()), y.map(ys.1.into())),
        Point::new(x.map(xs.1.into()), y.map(ys.1.into())),
    );
    matches!(out.last(), Some(DrawInstruction::Line(l)) if l.line == expected)
}

#[quickcheck]
fn labels_appear_exactly_when_they_fit(
    xs: (i16, i16, i16),
    ys: (i16, i16, i16),
    font_size: u8,
    offset: i8,
) -> TestResult {
    if font_size == 0 {
        return TestResult::discard();
    }
    let (x, y) = scales_from(xs, ys);
    let font = Font::heuristic(font_size.into());
    let size = font.size();
    let offset = f64::from(offset);
    let spec = GridSpec::new()
        .with_x_ticks(5)
        .with_y_ticks(5)
        .with_label_offset(offset);
    let out = spec.render(&x, &y, Some(&font));

    let mut expected = Vec::new();
    for t in x.ticks(5) {
        let text = crate::format_value(t);
        let width = font.text_width(&text);
        let label_x = x.map(t) - width / 2.0;
        if crate::fits_horizontally(label_x, width, f64::from(xs.2)) {
            let label_y = y.map(ys.1.into()) + offset + size;
            expected.push(TickLabel::new(text, (label_x, label_y), font.clone()));
        }
    }
    for t in y.ticks(5) {
        let text = crate::format_value(t);
        let label_y = y.map(t) + size / 3.0;
        if crate::clears_top_boundary(label_y, size) {
            let label_x = x.map(xs.0.into()) - (font.text_width(&text) + offset);
            expected.push(TickLabel::new(text, (label_x, label_y), font.clone()));
        }
    }
    TestResult::from_bool(labels(&out) == expected)
}

#[quickcheck]
fn colors_never_move_geometry(xs: (i16, i16, i16), ys: (i16, i16, i16)) -> bool {
    let (x, y) = scales_from(xs, ys);
    let font = Font::heuristic(12.0);
    let plain = GridSpec::new().render(&x, &y, Some(&font));
    let tinted = GridSpec::new()
        .with_line_color(css::TEAL)
        .with_axis_color(css::ORANGE)
        .render(&x, &y, Some(&font));

    plain.len() == tinted.len()
        && plain.iter().zip(&tinted).all(|(a, b)| match (a, b) {
            (DrawInstruction::Line(a), DrawInstruction::Line(b)) => {
                a.line == b.line && a.stroke_width == b.stroke_width
            }
            (DrawInstruction::Label(a), DrawInstruction::Label(b)) => a == b,
            _ => false,
        })
}

#[quickcheck]
fn rendering_is_idempotent(xs: (i16, i16, i16), ys: (i16, i16, i16), offset: i8) -> bool {
    let (x, y) = scales_from(xs, ys);
    let font = Font::heuristic(9.0);
    let spec = GridSpec::new().with_label_offset(offset.into());
    spec.render(&x, &y, Some(&font)) == spec.render(&x, &y, Some(&font))
}
