// File: crates/chart-render-skia/tests/raster.rs
// Purpose: End-to-end checks of the raster renderer: path fills, strokes, circles, text and PNG output.

use chart_core::{ChartError, RectI32, Renderer, DEFAULT_DPI};
use chart_render_skia::{circle_path, RasterOptions, RasterRenderer};
use skia_safe as skia;

fn decode(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory(bytes).expect("decode png").to_rgba8()
}

fn system_typeface() -> Option<skia::Typeface> {
    skia::FontMgr::default().legacy_make_typeface(None::<&str>, skia::FontStyle::normal())
}

#[test]
fn filled_triangle_round_trips_through_png() {
    let mut r = RasterRenderer::new(100, 100).expect("surface");
    r.set_fill_color(skia::Color::BLACK);
    r.move_to(10, 10);
    r.line_to(90, 10);
    r.line_to(90, 90);
    r.close();
    r.fill();

    let mut bytes = Vec::new();
    r.save(&mut bytes).expect("save");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = decode(&bytes);
    assert_eq!((img.width(), img.height()), (100, 100));
    assert_eq!(img.get_pixel(80, 20).0, [0, 0, 0, 255], "inside the triangle");
    assert_eq!(img.get_pixel(20, 80).0[3], 0, "below the diagonal stays background");
    assert_eq!(img.get_pixel(2, 2).0[3], 0, "corner stays background");
}

#[test]
fn zero_sized_surface_is_a_construction_error() {
    let err = RasterRenderer::new(0, 0).err().expect("must fail");
    assert!(matches!(err, ChartError::SurfaceCreation { width: 0, height: 0 }));
}

#[test]
fn background_option_is_applied() {
    let opts = RasterOptions { width: 4, height: 3, background: skia::Color::WHITE, ..RasterOptions::default() };
    let mut r = RasterRenderer::with_options(&opts).expect("surface");
    let img = decode(&r.png_bytes().expect("png"));
    assert_eq!((img.width(), img.height()), (4, 3));
    assert!(img.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}

#[test]
fn stroke_uses_the_current_snapshot() {
    let mut r = RasterRenderer::new(40, 40).expect("surface");
    r.set_stroke_color(skia::Color::RED);
    r.set_stroke_width(6.0);
    r.move_to(0, 20);
    r.line_to(40, 20);
    r.stroke();

    // A fill with no fill color set leaves the surface alone.
    r.move_to(0, 0);
    r.line_to(40, 0);
    r.line_to(40, 10);
    r.close();
    r.fill();

    let img = decode(&r.png_bytes().expect("png"));
    assert_eq!(img.get_pixel(20, 20).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(30, 4).0[3], 0);
}

#[test]
fn zero_width_stroke_draws_nothing() {
    let mut r = RasterRenderer::new(40, 40).expect("surface");
    r.set_stroke_color(skia::Color::RED);
    r.move_to(0, 20);
    r.line_to(40, 20);
    r.stroke();

    let img = decode(&r.png_bytes().expect("png"));
    assert!(img.pixels().all(|p| p.0[3] == 0), "width 0 must not fall back to a hairline");
}

#[test]
fn zero_width_fill_stroke_only_fills() {
    let mut r = RasterRenderer::new(40, 40).expect("surface");
    r.set_fill_color(skia::Color::BLUE);
    r.set_stroke_color(skia::Color::RED);
    r.move_to(10, 10);
    r.line_to(30, 10);
    r.line_to(30, 30);
    r.line_to(10, 30);
    r.close();
    r.fill_stroke();

    let img = decode(&r.png_bytes().expect("png"));
    assert_eq!(img.get_pixel(20, 20).0, [0, 0, 255, 255]);
    assert!(img.pixels().all(|p| p.0[0] == 0), "no red outline expected");
}

#[test]
fn dash_array_leaves_gaps_in_the_stroke() {
    let mut r = RasterRenderer::new(40, 40).expect("surface");
    r.set_stroke_color(skia::Color::RED);
    r.set_stroke_width(4.0);
    r.set_stroke_dash_array(&[4.0, 4.0]);
    r.move_to(0, 10);
    r.line_to(40, 10);
    r.stroke();

    // A single interval repeats into on 3 / off 3.
    r.set_stroke_dash_array(&[3.0]);
    r.move_to(0, 30);
    r.line_to(40, 30);
    r.stroke();

    let img = decode(&r.png_bytes().expect("png"));
    assert_eq!(img.get_pixel(1, 10).0, [255, 0, 0, 255], "inside first dash");
    assert_eq!(img.get_pixel(5, 10).0[3], 0, "inside first gap");
    assert_eq!(img.get_pixel(9, 10).0, [255, 0, 0, 255], "inside second dash");

    assert_eq!(img.get_pixel(1, 30).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(4, 30).0[3], 0);
    assert_eq!(img.get_pixel(7, 30).0, [255, 0, 0, 255]);
}

#[test]
fn each_stroke_uses_the_snapshot_at_call_time() {
    let mut r = RasterRenderer::new(40, 40).expect("surface");
    r.set_stroke_color(skia::Color::RED);
    r.set_stroke_width(4.0);
    r.move_to(0, 10);
    r.line_to(40, 10);
    r.stroke();

    r.set_stroke_color(skia::Color::BLUE);
    r.move_to(0, 30);
    r.line_to(40, 30);
    r.stroke();

    let img = decode(&r.png_bytes().expect("png"));
    assert_eq!(img.get_pixel(20, 10).0, [255, 0, 0, 255], "first line keeps its color");
    assert_eq!(img.get_pixel(20, 30).0, [0, 0, 255, 255], "second line picks up the new color");
}

#[test]
fn fill_stroke_paints_fill_beneath_stroke() {
    let mut r = RasterRenderer::new(60, 60).expect("surface");
    r.set_fill_color(skia::Color::BLUE);
    r.set_stroke_color(skia::Color::RED);
    r.set_stroke_width(4.0);
    r.move_to(10, 10);
    r.line_to(50, 10);
    r.line_to(50, 50);
    r.line_to(10, 50);
    r.close();
    r.fill_stroke();

    let img = decode(&r.png_bytes().expect("png"));
    assert_eq!(img.get_pixel(30, 30).0, [0, 0, 255, 255], "interior is fill");
    assert_eq!(img.get_pixel(30, 10).0, [255, 0, 0, 255], "edge is stroke");
}

#[test]
fn circle_path_anchors_at_cardinal_points() {
    let path = circle_path(10.0, 50, 40);
    assert_eq!(path.count_points(), 9);
    let anchors: Vec<_> = [0, 2, 4, 6, 8]
        .iter()
        .map(|&i| path.get_point(i).expect("point"))
        .map(|p| (p.x, p.y))
        .collect();
    assert_eq!(anchors, vec![(40.0, 40.0), (50.0, 30.0), (60.0, 40.0), (50.0, 50.0), (40.0, 40.0)]);
    for i in [1, 3, 5, 7] {
        let control = path.get_point(i).expect("control");
        assert_eq!((control.x, control.y), (50.0, 40.0));
    }
    assert!(path.is_last_contour_closed());
}

#[test]
fn circle_fills_around_its_center() {
    let mut r = RasterRenderer::new(100, 100).expect("surface");
    r.set_fill_color(skia::Color::BLACK);
    r.set_stroke_color(skia::Color::BLACK);
    r.set_stroke_width(1.0);
    r.circle(20.0, 50, 50);

    let img = decode(&r.png_bytes().expect("png"));
    assert_eq!(img.get_pixel(50, 50).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(5, 5).0[3], 0);
}

#[test]
fn text_without_font_is_unmeasurable_and_draws_nothing() {
    let mut r = RasterRenderer::new(50, 20).expect("surface");
    r.set_font_size(10.0);
    r.set_font_color(skia::Color::BLACK);
    assert_eq!(r.measure_text("hello"), RectI32::default());

    r.text("hello", 2, 15);
    let img = decode(&r.png_bytes().expect("png"));
    assert!(img.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn text_with_system_font_is_measured_from_top_left() {
    let Some(typeface) = system_typeface() else {
        eprintln!("[text] no system typeface available; skipping");
        return;
    };
    let mut r = RasterRenderer::new(200, 60).expect("surface");
    r.set_font(Some(typeface));
    r.set_font_size(18.0);
    r.set_font_color(skia::Color::BLACK);

    let rect = r.measure_text("Hello");
    assert_eq!((rect.left, rect.top), (0, 0));
    assert!(rect.right > 0 && rect.bottom > 0);

    r.text("Hello", 5, 40);
    let img = decode(&r.png_bytes().expect("png"));
    assert!(img.pixels().any(|p| p.0[3] > 0), "glyphs should be filled");
}

#[test]
fn dpi_is_a_pass_through() {
    let mut r = RasterRenderer::new(10, 10).expect("surface");
    assert_eq!(r.dpi(), DEFAULT_DPI);
    r.set_dpi(144.0);
    assert_eq!(r.dpi(), 144.0);
}

struct RejectingWriter;

impl std::io::Write for RejectingWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }
    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

#[test]
fn save_propagates_writer_failures() {
    let mut r = RasterRenderer::new(10, 10).expect("surface");
    let err = r.save(&mut RejectingWriter).err().expect("must fail");
    assert!(matches!(err, ChartError::Io(_)), "writer failure should surface as io: {err:?}");
}
