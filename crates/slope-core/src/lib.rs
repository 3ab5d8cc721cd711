// File: crates/slope-core/src/lib.rs
// Summary: Core library entry point; exports public API for slopegraph construction and rendering.

pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod host;
pub mod options;
pub mod scale;
pub mod surface;
pub mod types;

pub use chart::{RenderOptions, RenderReport, SlopeChart, COLUMN_A_LABEL, COLUMN_B_LABEL};
pub use config::{Color, SlopeStyle};
pub use dataset::{Cell, Columns, Dataset, Row};
pub use error::SlopeError;
pub use host::{SlopeVisualization, Visualization};
pub use scale::{LinearScale, PointScale};
pub use surface::{Anchor, Primitive, RecordingSurface, Stroke, Surface, TextStyle};
