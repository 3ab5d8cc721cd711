// File: crates/slope-core/src/chart.rs
// Summary: Slopegraph model and the layered rendering pipeline onto a Surface.

use crate::config::{Color, SlopeStyle};
use crate::dataset::{extract_columns, format_value, Columns, Dataset, Row};
use crate::scale::{LinearScale, PointScale};
use crate::surface::{Anchor, Stroke, Surface, TextStyle};
use crate::types::{Insets, HEIGHT, WIDTH};

/// Fixed label of the left measurement column.
pub const COLUMN_A_LABEL: &str = "Valor 1";
/// Fixed label of the right measurement column.
pub const COLUMN_B_LABEL: &str = "Valor 2";

const GRID_COLOR: Color = Color::rgb(0xcc, 0xcc, 0xcc);
const MARKER_RADIUS: f32 = 4.0;
const LABEL_GAP: f32 = 10.0;
// Baseline nudge that vertically centers a label on its endpoint.
const LABEL_SHIFT: f32 = 5.0;
const HEADER_GAP: f32 = 10.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            background: Color::rgb(255, 255, 255),
        }
    }
}

/// Outcome of one render call. `lines_drawn` equals the number of valid
/// rows; `skipped_rows` lists the dataset indices dropped as malformed,
/// for the caller to log.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderReport {
    pub lines_drawn: usize,
    pub skipped_rows: Vec<usize>,
}

pub struct SlopeChart {
    pub rows: Dataset,
}

impl SlopeChart {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_rows(rows: Dataset) -> Self {
        Self { rows }
    }

    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Render the slopegraph onto `surface`. Stateless and idempotent: the
    /// surface is cleared first and every layer is recomputed from scratch,
    /// so repeated calls with identical inputs emit identical commands.
    pub fn render(
        &self,
        style: &SlopeStyle,
        opts: &RenderOptions,
        surface: &mut dyn Surface,
    ) -> RenderReport {
        surface.clear(opts.background);

        let columns = extract_columns(&self.rows);
        if columns.is_empty() {
            draw_placeholder(surface, style, opts);
            return RenderReport { lines_drawn: 0, skipped_rows: columns.skipped };
        }

        // Plot rect
        let plot_left = opts.insets.left as f32;
        let plot_right = (opts.width - opts.insets.right as i32) as f32;
        let plot_top = opts.insets.top as f32;
        let plot_bottom = (opts.height - opts.insets.bottom as i32) as f32;

        // Scales are ephemeral, derived per call from the pooled domain.
        let (vmin, vmax) = columns.domain().unwrap_or((0.0, 1.0));
        let value_scale = LinearScale::new(plot_top, plot_bottom, vmin, vmax);
        let x_scale = PointScale::new([COLUMN_A_LABEL, COLUMN_B_LABEL], plot_left, plot_right);
        let x_a = x_scale.position(0);
        let x_b = x_scale.position(1);

        // Layers, back to front: grid, slopes with markers, labels, headers.
        if style.show_grid {
            draw_grid(surface, &x_scale, plot_top, plot_bottom);
        }
        draw_slopes(surface, style, &columns, &value_scale, x_a, x_b);
        draw_labels(surface, style, &columns, &value_scale, x_a, x_b);
        draw_headers(surface, style, x_a, x_b, plot_top);

        RenderReport { lines_drawn: columns.len(), skipped_rows: columns.skipped }
    }
}

impl Default for SlopeChart {
    fn default() -> Self {
        Self::new()
    }
}

// ---- layers -----------------------------------------------------------------

fn draw_grid(surface: &mut dyn Surface, x_scale: &PointScale, top: f32, bottom: f32) {
    let stroke = Stroke::dashed(GRID_COLOR, 1.0, 2.0, 2.0);
    for i in 0..x_scale.labels().len() {
        let x = x_scale.position(i);
        surface.line(x, top, x, bottom, &stroke);
    }
}

fn draw_slopes(
    surface: &mut dyn Surface,
    style: &SlopeStyle,
    columns: &Columns,
    value_scale: &LinearScale,
    x_a: f32,
    x_b: f32,
) {
    let stroke = Stroke::solid(style.line_color, style.line_width);
    for i in 0..columns.len() {
        let y1 = value_scale.to_px(columns.value1[i]);
        let y2 = value_scale.to_px(columns.value2[i]);
        surface.line(x_a, y1, x_b, y2, &stroke);
        surface.circle(x_a, y1, MARKER_RADIUS, style.line_color);
        surface.circle(x_b, y2, MARKER_RADIUS, style.line_color);
    }
}

fn draw_labels(
    surface: &mut dyn Surface,
    style: &SlopeStyle,
    columns: &Columns,
    value_scale: &LinearScale,
    x_a: f32,
    x_b: f32,
) {
    let left_style = TextStyle {
        color: style.text_color,
        size: style.text_size,
        anchor: Anchor::End,
        bold: false,
    };
    let right_style = TextStyle { anchor: Anchor::Start, ..left_style };

    for i in 0..columns.len() {
        let y1 = value_scale.to_px(columns.value1[i]);
        let y2 = value_scale.to_px(columns.value2[i]);

        // One composed left label; the original drew category and value on
        // top of each other.
        let value1 = format_value(columns.value1[i]);
        let left = if style.show_category_labels {
            format!("{} {}", columns.categories[i], value1)
        } else {
            value1
        };
        surface.text(&left, x_a - LABEL_GAP, y1 + LABEL_SHIFT, &left_style);

        let right = format_value(columns.value2[i]);
        surface.text(&right, x_b + LABEL_GAP, y2 + LABEL_SHIFT, &right_style);
    }
}

fn draw_headers(surface: &mut dyn Surface, style: &SlopeStyle, x_a: f32, x_b: f32, plot_top: f32) {
    let header_style = TextStyle {
        color: style.text_color,
        size: style.text_size + 2.0,
        anchor: Anchor::Middle,
        bold: true,
    };
    let y = plot_top - HEADER_GAP;
    surface.text(COLUMN_A_LABEL, x_a, y, &header_style);
    surface.text(COLUMN_B_LABEL, x_b, y, &header_style);
}

fn draw_placeholder(surface: &mut dyn Surface, style: &SlopeStyle, opts: &RenderOptions) {
    let text_style = TextStyle {
        color: style.text_color,
        size: style.text_size,
        anchor: Anchor::Middle,
        bold: false,
    };
    surface.text(
        "No data available for the slopegraph.",
        opts.width as f32 * 0.5,
        opts.height as f32 * 0.5,
        &text_style,
    );
}
