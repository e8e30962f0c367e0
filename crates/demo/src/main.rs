// File: crates/demo/src/main.rs
// Summary: Demo loads an (x, y) CSV, smooths it with a moving average and renders both lines to a PNG.
// Usage: constellation-demo <input.csv> [window] [output.png]

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{
    draw, ContinuousRange, RectI32, Renderer, Series, SimpleMovingAverageSeries, Style, ValueProvider,
};
use chart_render_skia::{RasterOptions, RasterRenderer};
use skia_safe as skia;
use tracing::{info, warn};

const MARGIN: i32 = 40;

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "prices.csv".to_string());
    let window = match args.next() {
        Some(w) => w.parse::<usize>().with_context(|| format!("invalid window size '{w}'"))?,
        None => 0,
    };

    let (path, used_alt) = resolve_path(&raw)?;
    info!(input = %path.display(), "using input file");
    if used_alt {
        info!("extension swapped between .csv/.cvs");
    }

    let series = load_xy_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if series.data_xy.is_empty() {
        anyhow::bail!("no rows loaded; check headers/delimiter.");
    }
    info!(rows = series.data_xy.len(), "loaded series");

    let out = match args.next() {
        Some(p) => PathBuf::from(p),
        None => out_name_for(&path),
    };

    let opts = RasterOptions { background: skia::Color::from_argb(255, 18, 18, 20), ..RasterOptions::default() };
    let mut r = RasterRenderer::with_options(&opts)?;

    let canvas_box = RectI32::from_ltrb(MARGIN, MARGIN, opts.width - MARGIN, opts.height - MARGIN);
    let x_range = ContinuousRange::from_values(series.data_xy.iter().map(|p| p.0), canvas_box.width());
    let y_range = ContinuousRange::from_values(series.data_xy.iter().map(|p| p.1), canvas_box.height());

    let raw_style = Style::new()
        .with_stroke_color(skia::Color::from_argb(255, 110, 110, 120))
        .with_stroke_width(1.0);
    draw::line_series(&mut r, canvas_box, &x_range, &y_range, &raw_style, &series);

    let sma = SimpleMovingAverageSeries::new("sma", series).with_window_size(window);
    let defaults = Style::new()
        .with_stroke_color(skia::Color::from_argb(255, 64, 160, 255))
        .with_stroke_width(2.0);
    sma.render(&mut r, canvas_box, &x_range, &y_range, &defaults);

    let (last_x, last_y) = sma.last_value();
    info!(window = sma.window_size(None), last_x, last_y, "moving average computed");
    draw_title(&mut r, &format!("SMA({}) last = {:.4}", sma.window_size(None), last_y), opts.width);

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(&out).with_context(|| format!("creating {}", out.display()))?;
    write_png(&mut r, file).with_context(|| format!("writing {}", out.display()))?;
    info!(output = %out.display(), points = sma.len(), "wrote chart");
    Ok(())
}

/// Buffered PNG write; the explicit flush reports failures that `Drop` would swallow.
fn write_png(r: &mut RasterRenderer, sink: impl Write) -> Result<()> {
    let mut writer = BufWriter::new(sink);
    r.save(&mut writer)?;
    writer.flush().context("flushing png output")?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();
}

/// Center a title above the plot when a system font is available.
fn draw_title(r: &mut RasterRenderer, title: &str, width: i32) {
    let typeface = skia::FontMgr::default().legacy_make_typeface(None::<&str>, skia::FontStyle::normal());
    if typeface.is_none() {
        warn!("no system typeface; title skipped");
        return;
    }
    Style::new()
        .with_font(typeface)
        .with_font_size(12.0)
        .with_font_color(skia::Color::from_argb(255, 235, 235, 245))
        .write_text_options_to_renderer(r);
    let bounds = r.measure_text(title);
    if bounds.is_zero() {
        warn!("title could not be measured; skipped");
        return;
    }
    r.text(title, (width - bounds.width()) / 2, MARGIN / 2 + bounds.height() / 2);
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let ext = p.extension()?.to_str()?.to_ascii_lowercase();
    let alt = match ext.as_str() {
        "csv" => "cvs",
        "cvs" => "csv",
        _ => return None,
    };
    Some(p.with_extension(alt))
}

/// Output file name like target/out/sma_<stem>.png
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("sma_{stem}.png"))
}

/// Load (x, y) rows. X comes from a time/index column when present (row index
/// otherwise); Y from the first of close/value/y.
fn load_xy_csv(path: &Path) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_x = idx(&["x", "time", "timestamp", "index"]);
    let i_y = idx(&["y", "value", "close", "price"])
        .with_context(|| format!("no y column among headers {headers:?}"))?;

    let mut series = Series::new(path.file_stem().and_then(|s| s.to_str()).unwrap_or("input"));
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        let x = i_x.and_then(parse).unwrap_or(row as f64);
        match parse(i_y) {
            Some(y) => series.push(x, y),
            None => warn!(row, "skipping row without numeric y"),
        }
    }
    Ok(series)
}
