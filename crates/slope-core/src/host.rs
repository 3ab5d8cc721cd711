// File: crates/slope-core/src/host.rs
// Summary: Host adapter with an explicit readiness gate around the render entry point.

use crate::chart::{RenderOptions, RenderReport, SlopeChart};
use crate::config::SlopeStyle;
use crate::dataset::Dataset;
use crate::surface::Surface;

/// Explicit lifecycle interface for embedding hosts: one-time setup plus a
/// per-change update. Any host adapter can drive this directly instead of
/// relying on by-name hook dispatch.
pub trait Visualization {
    /// One-time setup when the visualization instance is created.
    fn initialize(&mut self);

    /// Called on every data or configuration change. Returns the render
    /// report, or None when the render was deferred.
    fn update(
        &mut self,
        dataset: Dataset,
        style: SlopeStyle,
        opts: RenderOptions,
        surface: &mut dyn Surface,
    ) -> Option<RenderReport>;
}

struct Pending {
    dataset: Dataset,
    style: SlopeStyle,
    opts: RenderOptions,
}

/// Adapter gating renders on the drawing dependency's one-time readiness
/// signal. Updates arriving early are stashed (newest wins, no queue) and
/// drawn exactly once when `mark_ready` fires; afterwards every update
/// renders synchronously.
pub struct SlopeVisualization {
    ready: bool,
    pending: Option<Pending>,
}

impl SlopeVisualization {
    pub fn new() -> Self {
        Self { ready: false, pending: None }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Signal that the drawing dependency finished loading. Renders the
    /// latest deferred update, if any.
    pub fn mark_ready(&mut self, surface: &mut dyn Surface) -> Option<RenderReport> {
        self.ready = true;
        let p = self.pending.take()?;
        Some(render(p.dataset, &p.style, &p.opts, surface))
    }
}

impl Default for SlopeVisualization {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualization for SlopeVisualization {
    fn initialize(&mut self) {
        self.ready = false;
        self.pending = None;
    }

    fn update(
        &mut self,
        dataset: Dataset,
        style: SlopeStyle,
        opts: RenderOptions,
        surface: &mut dyn Surface,
    ) -> Option<RenderReport> {
        if self.ready {
            Some(render(dataset, &style, &opts, surface))
        } else {
            self.pending = Some(Pending { dataset, style, opts });
            None
        }
    }
}

fn render(
    dataset: Dataset,
    style: &SlopeStyle,
    opts: &RenderOptions,
    surface: &mut dyn Surface,
) -> RenderReport {
    SlopeChart::from_rows(dataset).render(style, opts, surface)
}
