// File: crates/slope-render-skia/src/lib.rs
// Summary: Skia-backed Surface plus headless PNG export on a CPU raster surface.

use anyhow::Result;
use skia_safe as skia;

use slope_core::{Anchor, Color, RenderOptions, RenderReport, SlopeChart, SlopeStyle, Stroke, Surface, TextStyle};

/// Surface adapter over a Skia canvas. The canvas is borrowed for one render
/// call; the host owns the backing store.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self { canvas }
    }

    fn stroke_paint(stroke: &Stroke) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_color(to_skia(stroke.color));
        paint.set_stroke_width(stroke.width);
        if let Some([on, off]) = stroke.dash {
            paint.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
        }
        paint
    }

    fn font_for(style: &TextStyle) -> skia::Font {
        let mut font = skia::Font::default();
        font.set_size(style.size.max(1.0));
        font.set_embolden(style.bold);
        font
    }
}

impl Surface for SkiaSurface<'_> {
    fn clear(&mut self, background: Color) {
        self.canvas.clear(to_skia(background));
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: &Stroke) {
        let paint = Self::stroke_paint(stroke);
        self.canvas.draw_line((x1, y1), (x2, y2), &paint);
    }

    fn circle(&mut self, cx: f32, cy: f32, radius: f32, fill: Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia(fill));
        self.canvas.draw_circle((cx, cy), radius, &paint);
    }

    fn text(&mut self, s: &str, x: f32, y: f32, style: &TextStyle) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(to_skia(style.color));
        let font = Self::font_for(style);
        let (advance, _bounds) = font.measure_str(s, Some(&paint));
        let x = match style.anchor {
            Anchor::Start => x,
            Anchor::Middle => x - advance * 0.5,
            Anchor::End => x - advance,
        };
        self.canvas.draw_str(s, (x, y), &font, &paint);
    }
}

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Render the slopegraph to PNG bytes using a CPU raster surface.
pub fn render_to_png_bytes(
    chart: &SlopeChart,
    style: &SlopeStyle,
    opts: &RenderOptions,
) -> Result<Vec<u8>> {
    let (_report, bytes) = render_raster(chart, style, opts)?;
    Ok(bytes)
}

/// Render the slopegraph to a PNG at `output_png_path`, returning the report.
pub fn render_to_png(
    chart: &SlopeChart,
    style: &SlopeStyle,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<RenderReport> {
    let (report, bytes) = render_raster(chart, style, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(report)
}

fn render_raster(
    chart: &SlopeChart,
    style: &SlopeStyle,
    opts: &RenderOptions,
) -> Result<(RenderReport, Vec<u8>)> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;

    let report = {
        let mut target = SkiaSurface::new(surface.canvas());
        chart.render(style, opts, &mut target)
    };

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok((report, data.as_bytes().to_vec()))
}
