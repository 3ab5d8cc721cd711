// File: crates/slope-core/src/scale.rs
// Summary: Linear value (Y) and discrete point (X) scale transforms.

/// Vertical value scale mapping a data range to [bottom, top] pixels,
/// inverted so larger values land higher on screen.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        Self { top_px, bottom_px, vmin, vmax }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        // Span guard keeps a degenerate domain (vmin == vmax) from dividing
        // by zero; all points then collapse onto bottom_px.
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((v - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.vmin + ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64 * span
    }
}

/// Discrete point scale: N labels spread evenly across [left, right].
/// The slopegraph uses exactly two ("Valor 1" / "Valor 2"), which pins them
/// to the plot edges; any N >= 1 is supported.
#[derive(Clone, Debug)]
pub struct PointScale {
    labels: Vec<String>,
    left_px: f32,
    right_px: f32,
}

impl PointScale {
    pub fn new(labels: impl IntoIterator<Item = impl Into<String>>, left_px: f32, right_px: f32) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            left_px,
            right_px,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Pixel position of label index `i`.
    pub fn position(&self, i: usize) -> f32 {
        match self.labels.len() {
            0 | 1 => self.left_px,
            n => {
                let step = (self.right_px - self.left_px) / (n as f32 - 1.0);
                self.left_px + step * i as f32
            }
        }
    }

    /// Pixel position of a label, if it belongs to this scale.
    pub fn to_px(&self, label: &str) -> Option<f32> {
        let i = self.labels.iter().position(|l| l == label)?;
        Some(self.position(i))
    }
}
