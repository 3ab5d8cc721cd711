// File: crates/slope-core/src/options.rs
// Summary: Boundary normalization of host option payloads into SlopeStyle.

use serde_json::Value;

use crate::config::{Color, SlopeStyle};
use crate::error::SlopeError;

/// Normalize a host option map into a typed style.
///
/// Hosts are inconsistent about wrapping: an entry may be a raw primitive
/// (`"lineColor": "#007acc"`) or a wrapped object (`"lineColor": {"value":
/// "#007acc"}`). Both forms are accepted here so the renderer only ever sees
/// the typed struct. Missing keys and JSON nulls take defaults; unknown keys
/// are ignored; a present value of the wrong type is an error rather than a
/// silent fallback.
pub fn parse_options(options: &Value) -> Result<SlopeStyle, SlopeError> {
    let mut style = SlopeStyle::default();
    let map = match options {
        Value::Null => return Ok(style),
        Value::Object(map) => map,
        _ => {
            return Err(SlopeError::InvalidOption {
                name: "options".to_string(),
                reason: "expected an object".to_string(),
            })
        }
    };

    if let Some(v) = entry(map, "lineColor") {
        style.line_color = color(v, "lineColor")?;
    }
    if let Some(v) = entry(map, "textColor") {
        style.text_color = color(v, "textColor")?;
    }
    if let Some(v) = entry(map, "textSize") {
        style.text_size = positive(v, "textSize")?;
    }
    if let Some(v) = entry(map, "lineWidth") {
        style.line_width = positive(v, "lineWidth")?;
    }
    if let Some(v) = entry(map, "showGrid") {
        style.show_grid = boolean(v, "showGrid")?;
    }
    if let Some(v) = entry(map, "showCategoryLabels") {
        style.show_category_labels = boolean(v, "showCategoryLabels")?;
    }
    Ok(style)
}

/// Fetch a key, unwrapping one `{"value": ...}` layer when present.
fn entry<'a>(map: &'a serde_json::Map<String, Value>, key: &str) -> Option<&'a Value> {
    let v = map.get(key)?;
    let v = match v {
        Value::Object(inner) => inner.get("value")?,
        other => other,
    };
    if v.is_null() {
        None
    } else {
        Some(v)
    }
}

fn color(v: &Value, name: &str) -> Result<Color, SlopeError> {
    match v {
        Value::String(s) => Color::from_hex(s),
        _ => Err(mismatch(name, "a hex color string")),
    }
}

fn positive(v: &Value, name: &str) -> Result<f32, SlopeError> {
    match v.as_f64() {
        Some(n) if n > 0.0 && n.is_finite() => Ok(n as f32),
        Some(_) => Err(mismatch(name, "a positive number")),
        None => Err(mismatch(name, "a number")),
    }
}

fn boolean(v: &Value, name: &str) -> Result<bool, SlopeError> {
    v.as_bool().ok_or_else(|| mismatch(name, "a boolean"))
}

fn mismatch(name: &str, expected: &str) -> SlopeError {
    SlopeError::InvalidOption {
        name: name.to_string(),
        reason: format!("expected {expected}"),
    }
}
