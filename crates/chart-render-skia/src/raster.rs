// File: crates/chart-render-skia/src/raster.rs
// Summary: Renderer backed by a Skia CPU raster surface; saves as PNG.
// Notes:
// - The current path is owned here and reset after every stroke/fill, the way
//   a vector graphic context consumes its path when drawing.
// - Paints are rebuilt from the style snapshot on every draw call.

use std::io::Write;

use chart_core::{normalize_text_bounds, ChartError, ChartResult, RectI32, Renderer, Style, DEFAULT_DPI};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use skia_safe as skia;

/// Surface configuration for [`RasterRenderer`].
#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    pub width: i32,
    pub height: i32,
    pub dpi: f64,
    pub background: skia::Color,
    pub anti_alias: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 640,
            dpi: DEFAULT_DPI,
            background: skia::Color::TRANSPARENT,
            anti_alias: true,
        }
    }
}

pub struct RasterRenderer {
    surface: skia::Surface,
    path: skia::Path,
    dpi: f64,
    anti_alias: bool,
    style: Style,
}

impl RasterRenderer {
    /// Surface of `width` x `height` pixels with default options.
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        Self::with_options(&RasterOptions { width, height, ..RasterOptions::default() })
    }

    pub fn with_options(opts: &RasterOptions) -> ChartResult<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::SurfaceCreation { width: opts.width, height: opts.height })?;
        surface.canvas().clear(opts.background);
        tracing::debug!(width = opts.width, height = opts.height, dpi = opts.dpi, "raster surface created");
        Ok(Self {
            surface,
            path: skia::Path::new(),
            dpi: opts.dpi,
            anti_alias: opts.anti_alias,
            style: Style::default(),
        })
    }

    pub fn width(&self) -> i32 { self.surface.width() }
    pub fn height(&self) -> i32 { self.surface.height() }

    /// Current style snapshot.
    pub fn style(&self) -> &Style { &self.style }

    /// Unpremultiplied RGBA8 pixels, row-major, `width * 4` bytes per row.
    pub fn to_rgba8(&mut self) -> ChartResult<Vec<u8>> {
        let (w, h) = (self.width(), self.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::PixelReadback);
        }
        Ok(pixels)
    }

    /// PNG-encoded image in memory.
    pub fn png_bytes(&mut self) -> ChartResult<Vec<u8>> {
        let mut out = Vec::new();
        self.save(&mut out)?;
        Ok(out)
    }

    fn base_paint(&self, style: skia::paint::Style, color: skia::Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(self.anti_alias);
        paint.set_style(style);
        paint.set_color(color);
        paint
    }

    fn fill_paint(&self) -> skia::Paint {
        self.base_paint(skia::paint::Style::Fill, self.style.fill_color)
    }

    // Skia strokes width 0 as a hairline; here it means "no outline".
    fn stroke_paint(&self) -> Option<skia::Paint> {
        if self.style.stroke_width <= 0.0 {
            return None;
        }
        let mut paint = self.base_paint(skia::paint::Style::Stroke, self.style.stroke_color);
        paint.set_stroke_width(self.style.stroke_width as f32);
        paint.set_path_effect(dash_effect(&self.style.stroke_dash_array));
        Some(paint)
    }

    // `None` when no typeface is set; text is then neither drawn nor measurable.
    fn text_font(&self) -> Option<skia::Font> {
        let typeface = self.style.font.clone()?;
        let pixels = self.style.font_size * self.dpi / 72.0;
        Some(skia::Font::from_typeface(typeface, pixels as f32))
    }

    fn draw_current_path(&mut self, paints: &[Option<skia::Paint>]) {
        let canvas = self.surface.canvas();
        for paint in paints.iter().flatten() {
            canvas.draw_path(&self.path, paint);
        }
        self.path.reset();
    }
}

impl Renderer for RasterRenderer {
    fn dpi(&self) -> f64 { self.dpi }

    fn set_dpi(&mut self, dpi: f64) { self.dpi = dpi; }

    fn set_stroke_color(&mut self, color: skia::Color) {
        self.style = self.style.clone().with_stroke_color(color);
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.style = self.style.clone().with_stroke_width(width);
    }

    fn set_stroke_dash_array(&mut self, dash_array: &[f64]) {
        self.style = self.style.clone().with_stroke_dash_array(dash_array.to_vec());
    }

    fn set_fill_color(&mut self, color: skia::Color) {
        self.style = self.style.clone().with_fill_color(color);
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.path.move_to((x as f32, y as f32));
    }

    fn line_to(&mut self, x: i32, y: i32) {
        self.path.line_to((x as f32, y as f32));
    }

    fn close(&mut self) {
        self.path.close();
    }

    fn stroke(&mut self) {
        let stroke = self.stroke_paint();
        self.draw_current_path(&[stroke]);
    }

    fn fill(&mut self) {
        let fill = self.fill_paint();
        self.draw_current_path(&[Some(fill)]);
    }

    fn fill_stroke(&mut self) {
        let fill = self.fill_paint();
        let stroke = self.stroke_paint();
        self.draw_current_path(&[Some(fill), stroke]);
    }

    fn circle(&mut self, radius: f64, x: i32, y: i32) {
        self.path.add_path(&circle_path(radius, x, y), (0.0, 0.0), None);
        self.fill_stroke();
    }

    fn set_font(&mut self, font: Option<skia::Typeface>) {
        self.style = self.style.clone().with_font(font);
    }

    fn set_font_size(&mut self, size: f64) {
        self.style = self.style.clone().with_font_size(size);
    }

    fn set_font_color(&mut self, color: skia::Color) {
        self.style = self.style.clone().with_font_color(color);
    }

    fn text(&mut self, body: &str, x: i32, y: i32) {
        let Some(font) = self.text_font() else {
            tracing::debug!(body, "text skipped: no font set");
            return;
        };
        let glyphs = string_path(&font, body, (x as f32, y as f32));
        let paint = self.base_paint(skia::paint::Style::Fill, self.style.font_color);
        self.surface.canvas().draw_path(&glyphs, &paint);
    }

    fn measure_text(&mut self, body: &str) -> RectI32 {
        let Some(font) = self.text_font() else {
            tracing::debug!(body, "text measurement failed: no font set");
            return RectI32::default();
        };
        let bounds = string_path(&font, body, (0.0, 0.0)).compute_tight_bounds();
        normalize_text_bounds(
            bounds.left as f64,
            bounds.top as f64,
            bounds.right as f64,
            bounds.bottom as f64,
        )
    }

    fn save(&mut self, w: &mut dyn Write) -> ChartResult<()> {
        let pixels = self.to_rgba8()?;
        let (width, height) = (self.width() as u32, self.height() as u32);
        PngEncoder::new(w)
            .write_image(&pixels, width, height, ExtendedColorType::Rgba8)
            .map_err(|err| match err {
                image::ImageError::IoError(io) => ChartError::Io(io),
                other => ChartError::Encode(other.to_string()),
            })?;
        tracing::debug!(width, height, "raster image encoded as png");
        Ok(())
    }
}

/// Closed path of four quadratic arcs around `(x, y)`.
///
/// Starts at the left point and passes through top, right and bottom before
/// returning left; every control point is the center.
pub fn circle_path(radius: f64, x: i32, y: i32) -> skia::Path {
    let (cx, cy, r) = (x as f32, y as f32, radius as f32);
    let mut path = skia::Path::new();
    path.move_to((cx - r, cy));
    path.quad_to((cx, cy), (cx, cy - r));
    path.quad_to((cx, cy), (cx + r, cy));
    path.quad_to((cx, cy), (cx, cy + r));
    path.quad_to((cx, cy), (cx - r, cy));
    path.close();
    path
}

/// Glyph outlines of `body` laid out from the baseline `origin`.
fn string_path(font: &skia::Font, body: &str, origin: (f32, f32)) -> skia::Path {
    let glyphs = font.str_to_glyphs_vec(body);
    let mut positions = vec![skia::Point::default(); glyphs.len()];
    font.get_pos(&glyphs, &mut positions, Some(skia::Point::new(origin.0, origin.1)));

    let mut path = skia::Path::new();
    for (glyph, pos) in glyphs.iter().zip(positions.iter()) {
        if let Some(outline) = font.get_path(*glyph) {
            path.add_path(&outline, *pos, None);
        }
    }
    path
}

// Skia wants an even number of intervals; odd arrays repeat, as in SVG.
fn dash_effect(dash_array: &[f64]) -> Option<skia::PathEffect> {
    if dash_array.is_empty() {
        return None;
    }
    let mut intervals: Vec<f32> = dash_array.iter().map(|v| *v as f32).collect();
    if intervals.len() % 2 == 1 {
        intervals.extend_from_within(..);
    }
    skia::PathEffect::dash(&intervals, 0.0)
}
