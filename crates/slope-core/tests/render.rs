// File: crates/slope-core/tests/render.rs
// Purpose: Validate the layered render pipeline against a recording surface:
// line counts, vertical ordering, idempotence, empty/degenerate boundaries,
// config toggles, and malformed-row skipping.

use slope_core::types::Insets;
use slope_core::{
    Cell, Primitive, RecordingSurface, RenderOptions, Row, SlopeChart, SlopeStyle,
    COLUMN_A_LABEL, COLUMN_B_LABEL,
};

fn sample_chart() -> SlopeChart {
    SlopeChart::from_rows(vec![
        Row::new("A", 10.0, 20.0),
        Row::new("B", 30.0, 5.0),
    ])
}

fn endpoints(p: &Primitive) -> (f32, f32, f32, f32) {
    match p {
        Primitive::Line { x1, y1, x2, y2, .. } => (*x1, *y1, *x2, *y2),
        other => panic!("expected a line, got {other:?}"),
    }
}

#[test]
fn one_connecting_line_per_valid_row() {
    let chart = sample_chart();
    let mut surface = RecordingSurface::new();
    let report = chart.render(&SlopeStyle::default(), &RenderOptions::default(), &mut surface);

    assert_eq!(report.lines_drawn, 2);
    assert!(report.skipped_rows.is_empty());
    assert_eq!(surface.solid_lines().len(), 2);
    // Two endpoint markers per row
    assert_eq!(surface.circles().len(), 4);
}

#[test]
fn example_scenario_coordinates() {
    // Dataset [("A",10,20),("B",30,5)], domain [5,30], 600x400 viewport,
    // margins {top:20,bottom:20,left:100,right:100}.
    let chart = sample_chart();
    let opts = RenderOptions {
        insets: Insets::new(100, 100, 20, 20),
        ..RenderOptions::default()
    };
    let mut surface = RecordingSurface::new();
    chart.render(&SlopeStyle::default(), &opts, &mut surface);

    let lines = surface.solid_lines();
    assert_eq!(lines.len(), 2);

    let (ax1, ay1, ax2, ay2) = endpoints(lines[0]);
    assert_eq!((ax1, ax2), (100.0, 500.0));
    // y = 380 - (v - 5) / 25 * 360
    assert!((ay1 - 308.0).abs() < 1e-3);
    assert!((ay2 - 164.0).abs() < 1e-3);
    // Value rose 10 -> 20, so the right endpoint sits higher on screen.
    assert!(ay2 < ay1);

    let (_, by1, _, by2) = endpoints(lines[1]);
    assert!((by1 - 20.0).abs() < 1e-3);
    assert!((by2 - 380.0).abs() < 1e-3);
    // Value fell 30 -> 5, so the left endpoint sits higher.
    assert!(by1 < by2);
}

#[test]
fn screen_y_decreases_as_value_increases() {
    let chart = SlopeChart::from_rows(vec![
        Row::new("low", 1.0, 1.0),
        Row::new("mid", 5.0, 5.0),
        Row::new("high", 9.0, 9.0),
    ]);
    let mut surface = RecordingSurface::new();
    chart.render(&SlopeStyle::default(), &RenderOptions::default(), &mut surface);

    let ys: Vec<f32> = surface
        .solid_lines()
        .iter()
        .map(|&p| endpoints(p).1)
        .collect();
    assert!(ys[0] > ys[1] && ys[1] > ys[2], "higher value, smaller y: {ys:?}");
}

#[test]
fn render_is_idempotent() {
    let chart = sample_chart();
    let style = SlopeStyle::default();
    let opts = RenderOptions::default();

    let mut first = RecordingSurface::new();
    chart.render(&style, &opts, &mut first);
    let mut second = RecordingSurface::new();
    chart.render(&style, &opts, &mut second);
    assert_eq!(first.primitives, second.primitives);

    // Re-rendering onto the same surface clears once per call and repeats
    // the exact command sequence; nothing accumulates within a call.
    let n = first.primitives.len();
    chart.render(&style, &opts, &mut first);
    assert_eq!(first.primitives.len(), 2 * n);
    assert_eq!(first.clears(), 2);
    assert_eq!(first.primitives[..n], first.primitives[n..]);
}

#[test]
fn empty_dataset_renders_placeholder_only() {
    let chart = SlopeChart::new();
    let mut surface = RecordingSurface::new();
    let report = chart.render(&SlopeStyle::default(), &RenderOptions::default(), &mut surface);

    assert_eq!(report.lines_drawn, 0);
    assert_eq!(surface.clears(), 1);
    assert!(surface.lines().is_empty());
    assert!(surface.circles().is_empty());
    let texts = surface.texts();
    assert_eq!(texts.len(), 1, "a single visible placeholder message");
}

#[test]
fn degenerate_domain_collapses_to_one_y() {
    let chart = SlopeChart::from_rows(vec![
        Row::new("A", 7.0, 7.0),
        Row::new("B", 7.0, 7.0),
    ]);
    let mut surface = RecordingSurface::new();
    let report = chart.render(&SlopeStyle::default(), &RenderOptions::default(), &mut surface);

    assert_eq!(report.lines_drawn, 2);
    let mut ys = Vec::new();
    for p in surface.solid_lines() {
        let (_, y1, _, y2) = endpoints(p);
        assert!(y1.is_finite() && y2.is_finite());
        ys.push(y1);
        ys.push(y2);
    }
    assert!(ys.windows(2).all(|w| w[0] == w[1]), "all endpoints share one y: {ys:?}");
}

#[test]
fn show_grid_toggle() {
    let chart = sample_chart();
    let mut with_grid = RecordingSurface::new();
    chart.render(&SlopeStyle::default(), &RenderOptions::default(), &mut with_grid);
    assert_eq!(with_grid.dashed_lines().len(), 2, "one guide per column position");

    let style = SlopeStyle { show_grid: false, ..SlopeStyle::default() };
    let mut without = RecordingSurface::new();
    chart.render(&style, &RenderOptions::default(), &mut without);
    assert!(without.dashed_lines().is_empty());
    // Data layers unaffected
    assert_eq!(without.solid_lines().len(), 2);
    assert_eq!(without.circles().len(), 4);
}

#[test]
fn category_labels_toggle() {
    let chart = sample_chart();
    let default_style = SlopeStyle::default();
    let mut with_labels = RecordingSurface::new();
    chart.render(&default_style, &RenderOptions::default(), &mut with_labels);
    let has_category = |s: &RecordingSurface| {
        s.texts().iter().any(|p| match p {
            Primitive::Text { s, .. } => s.contains('A') && s.contains("10"),
            _ => false,
        })
    };
    assert!(has_category(&with_labels), "composed \"A 10\" label present");

    let style = SlopeStyle { show_category_labels: false, ..default_style };
    let mut without = RecordingSurface::new();
    chart.render(&style, &RenderOptions::default(), &mut without);
    assert!(!has_category(&without));
    // Bare value labels and column headers survive the toggle.
    let texts: Vec<String> = without
        .texts()
        .iter()
        .filter_map(|p| match p {
            Primitive::Text { s, .. } => Some(s.clone()),
            _ => None,
        })
        .collect();
    assert!(texts.iter().any(|s| s == "10"));
    assert!(texts.iter().any(|s| s == "20"));
    assert!(texts.iter().any(|s| s == COLUMN_A_LABEL));
    assert!(texts.iter().any(|s| s == COLUMN_B_LABEL));
}

#[test]
fn malformed_rows_are_skipped_and_reported() {
    let chart = SlopeChart::from_rows(vec![
        Row::new("ok", 1.0, 2.0),
        Row {
            category: Cell::text("broken"),
            value1: Cell::text("n/a"),
            value2: Cell::number(3.0),
        },
        Row {
            category: Cell::text("nan"),
            value1: Cell { formatted: "NaN".into(), parsed: Some(f64::NAN) },
            value2: Cell::number(4.0),
        },
        Row::new("also ok", 5.0, 6.0),
    ]);
    let mut surface = RecordingSurface::new();
    let report = chart.render(&SlopeStyle::default(), &RenderOptions::default(), &mut surface);

    assert_eq!(report.lines_drawn, 2);
    assert_eq!(report.skipped_rows, vec![1, 2]);
    assert_eq!(surface.solid_lines().len(), 2);
    for p in surface.lines() {
        let (x1, y1, x2, y2) = endpoints(p);
        assert!(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite());
    }
}

#[test]
fn headers_render_above_plot() {
    let chart = sample_chart();
    let opts = RenderOptions::default();
    let mut surface = RecordingSurface::new();
    chart.render(&SlopeStyle::default(), &opts, &mut surface);

    let plot_top = opts.insets.top as f32;
    let headers: Vec<_> = surface
        .texts()
        .into_iter()
        .filter(|p| match p {
            Primitive::Text { s, .. } => s == COLUMN_A_LABEL || s == COLUMN_B_LABEL,
            _ => false,
        })
        .collect();
    assert_eq!(headers.len(), 2);
    for p in headers {
        if let Primitive::Text { y, style, .. } = p {
            assert!(*y < plot_top, "header above the plotting region");
            assert!(style.bold);
            assert_eq!(style.size, SlopeStyle::default().text_size + 2.0);
        }
    }
}
