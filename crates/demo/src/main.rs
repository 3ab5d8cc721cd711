// File: crates/demo/src/main.rs
// Summary: Demo loads a category/value1/value2 CSV (or sample data) and renders a slopegraph PNG.

use anyhow::{Context, Result};
use slope_core::options::parse_options;
use slope_core::{Cell, Dataset, RenderOptions, Row, SlopeChart, SlopeStyle};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let csv_path = args.next();
    let options_path = args.next();

    let rows = match csv_path {
        Some(p) => {
            let path = Path::new(&p);
            println!("Using input file: {}", path.display());
            load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            println!("No input file given; using sample data.");
            sample_rows()
        }
    };
    println!("Loaded {} rows", rows.len());

    let style = match options_path {
        Some(p) => {
            let raw = std::fs::read_to_string(&p).with_context(|| format!("reading options '{p}'"))?;
            let json: serde_json::Value =
                serde_json::from_str(&raw).with_context(|| format!("parsing options '{p}'"))?;
            parse_options(&json).context("normalizing options")?
        }
        None => SlopeStyle::default(),
    };

    let chart = SlopeChart::from_rows(rows);
    let opts = RenderOptions::default();
    let out = out_name(csv_path.as_deref());
    let report = slope_render_skia::render_to_png(&chart, &style, &opts, &out)?;

    println!("Drew {} connecting lines", report.lines_drawn);
    for i in &report.skipped_rows {
        println!("Warning: skipped malformed row {i}");
    }
    println!("Wrote {}", out.display());
    Ok(())
}

/// Produce output file name like target/out/slopegraph_<stem>.png
fn out_name(input: Option<&str>) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    let stem = input
        .map(Path::new)
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("sample");
    out.push(format!("slopegraph_{stem}.png"));
    out
}

/// Load a CSV with three columns: category, value1, value2. A header line is
/// detected by its numeric columns failing to parse. Rows keep both the raw
/// display string and the parsed number, so malformed rows flow through to
/// the renderer's skip-and-report path instead of aborting the load.
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut rows = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let field = |ix: usize| rec.get(ix).unwrap_or("").trim().to_string();
        let (cat, v1, v2) = (field(0), field(1), field(2));
        if i == 0 && v1.parse::<f64>().is_err() && v2.parse::<f64>().is_err() {
            println!("Headers: {:?}", [&cat, &v1, &v2]);
            continue;
        }
        rows.push(Row {
            category: Cell::text(cat),
            value1: numeric_cell(v1),
            value2: numeric_cell(v2),
        });
    }
    Ok(rows)
}

fn numeric_cell(raw: String) -> Cell {
    let parsed = raw.parse::<f64>().ok();
    Cell { formatted: raw, parsed }
}

fn sample_rows() -> Dataset {
    vec![
        Row::new("Norte", 120.0, 95.0),
        Row::new("Sul", 80.0, 130.0),
        Row::new("Leste", 60.0, 72.0),
        Row::new("Oeste", 140.0, 140.0),
        Row::new("Centro", 45.0, 30.0),
    ]
}
