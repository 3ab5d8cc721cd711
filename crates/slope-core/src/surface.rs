// File: crates/slope-core/src/surface.rs
// Summary: Renderer-agnostic drawing surface trait plus a recording implementation.

use crate::config::Color;

/// Horizontal anchoring of a text run relative to its x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Stroke style for line primitives. `dash` is an on/off pixel pair;
/// None strokes solid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width, dash: None }
    }

    pub fn dashed(color: Color, width: f32, on: f32, off: f32) -> Self {
        Self { color, width, dash: Some([on, off]) }
    }
}

/// Text run style. `y` in `Surface::text` is the baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
    pub anchor: Anchor,
    pub bold: bool,
}

/// A capable 2D vector-drawing surface, owned by the host for the duration
/// of one render call. Drawing is infallible; backends that can fail do so
/// at surface construction or export time.
pub trait Surface {
    fn clear(&mut self, background: Color);
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: &Stroke);
    fn circle(&mut self, cx: f32, cy: f32, radius: f32, fill: Color);
    fn text(&mut self, s: &str, x: f32, y: f32, style: &TextStyle);
}

/// One recorded drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Clear { background: Color },
    Line { x1: f32, y1: f32, x2: f32, y2: f32, stroke: Stroke },
    Circle { cx: f32, cy: f32, radius: f32, fill: Color },
    Text { s: String, x: f32, y: f32, style: TextStyle },
}

/// Surface that records every command as a value, for assertions and benches.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub primitives: Vec<Primitive>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<&Primitive> {
        self.filter(|p| matches!(p, Primitive::Line { .. }))
    }

    pub fn solid_lines(&self) -> Vec<&Primitive> {
        self.filter(|p| matches!(p, Primitive::Line { stroke, .. } if stroke.dash.is_none()))
    }

    pub fn dashed_lines(&self) -> Vec<&Primitive> {
        self.filter(|p| matches!(p, Primitive::Line { stroke, .. } if stroke.dash.is_some()))
    }

    pub fn circles(&self) -> Vec<&Primitive> {
        self.filter(|p| matches!(p, Primitive::Circle { .. }))
    }

    pub fn texts(&self) -> Vec<&Primitive> {
        self.filter(|p| matches!(p, Primitive::Text { .. }))
    }

    pub fn clears(&self) -> usize {
        self.primitives.iter().filter(|p| matches!(p, Primitive::Clear { .. })).count()
    }

    fn filter(&self, pred: impl Fn(&Primitive) -> bool) -> Vec<&Primitive> {
        self.primitives.iter().filter(|p| pred(p)).collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, background: Color) {
        self.primitives.push(Primitive::Clear { background });
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: &Stroke) {
        self.primitives.push(Primitive::Line { x1, y1, x2, y2, stroke: *stroke });
    }

    fn circle(&mut self, cx: f32, cy: f32, radius: f32, fill: Color) {
        self.primitives.push(Primitive::Circle { cx, cy, radius, fill });
    }

    fn text(&mut self, s: &str, x: f32, y: f32, style: &TextStyle) {
        self.primitives.push(Primitive::Text { s: s.to_string(), x, y, style: *style });
    }
}
