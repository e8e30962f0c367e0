// File: crates/chart-core/src/renderer.rs
// Summary: Drawing-surface contract shared by every output backend.

use std::io::Write;

use skia_safe as skia;

use crate::error::ChartResult;
use crate::geometry::RectI32;

/// Default resolution, in dots per inch, used when converting font points to pixels.
pub const DEFAULT_DPI: f64 = 92.0;

/// Stateful drawing surface.
///
/// Style setters only record a snapshot. `stroke`, `fill`, `fill_stroke`,
/// `circle` and `text` push the whole relevant part of that snapshot into the
/// backend on every call; backends must not rely on state left behind by an
/// earlier draw. A path is built with `move_to`/`line_to`/`close` and consumed
/// by the next stroke or fill.
pub trait Renderer {
    fn dpi(&self) -> f64;
    fn set_dpi(&mut self, dpi: f64);

    fn set_stroke_color(&mut self, color: skia::Color);
    fn set_stroke_width(&mut self, width: f64);
    fn set_stroke_dash_array(&mut self, dash_array: &[f64]);
    fn set_fill_color(&mut self, color: skia::Color);

    fn move_to(&mut self, x: i32, y: i32);
    fn line_to(&mut self, x: i32, y: i32);
    fn close(&mut self);

    /// Outline the current path with the stroke color, width and dash. A width
    /// of zero or less draws no outline.
    fn stroke(&mut self);
    /// Fill the current path with the fill color.
    fn fill(&mut self);
    /// Fill, then outline, the current path.
    fn fill_stroke(&mut self);

    /// Four quadratic arcs meeting at the cardinal points around `(x, y)`, filled and stroked.
    fn circle(&mut self, radius: f64, x: i32, y: i32);

    fn set_font(&mut self, font: Option<skia::Typeface>);
    fn set_font_size(&mut self, size: f64);
    fn set_font_color(&mut self, color: skia::Color);

    /// Fill the glyph outlines of `body` with the baseline origin at `(x, y)`.
    ///
    /// Glyphs are filled immediately from their own path: the current path is
    /// neither drawn nor cleared, and the next stroke or fill does not include
    /// the text.
    fn text(&mut self, body: &str, x: i32, y: i32);

    /// Top-left anchored bounds of `body`. An all-zero box means the text could not be measured.
    fn measure_text(&mut self, body: &str) -> RectI32;

    /// Encode the current image into `w`. The caller owns the writer.
    fn save(&mut self, w: &mut dyn Write) -> ChartResult<()>;
}
