// File: crates/chart-core/src/draw.rs
// Summary: Generic line-series drawing over any Renderer and ValueProvider.

use crate::geometry::RectI32;
use crate::range::ContinuousRange;
use crate::renderer::Renderer;
use crate::series::ValueProvider;
use crate::style::Style;

/// Draw `values` inside `canvas_box`.
///
/// Order: the area under the line down to the zero value (when a fill color is
/// set), then the polyline stroke, then one dot per sample.
pub fn line_series(
    r: &mut dyn Renderer,
    canvas_box: RectI32,
    x_range: &ContinuousRange,
    y_range: &ContinuousRange,
    style: &Style,
    values: &dyn ValueProvider,
) {
    if style.hidden || values.is_empty() {
        return;
    }
    tracing::trace!(points = values.len(), "drawing line series");

    let cb = canvas_box.bottom;
    let cl = canvas_box.left;
    let project = |index: usize| {
        let (vx, vy) = values.value(index);
        (cl + x_range.translate(vx), cb - y_range.translate(vy))
    };

    // Each pass restarts at index 0 so stateful providers see a full sequential traversal.
    if style.should_draw_fill() {
        let (x0, y0) = project(0);
        let zero = cb - y_range.translate(0.0).clamp(0, y_range.domain.max(0));
        style.fill_options().write_drawing_options_to_renderer(r);
        r.move_to(x0, zero);
        r.line_to(x0, y0);
        let mut last_x = x0;
        for i in 1..values.len() {
            let (x, y) = project(i);
            r.line_to(x, y);
            last_x = x;
        }
        r.line_to(last_x, zero);
        r.line_to(x0, zero);
        r.close();
        r.fill();
    }

    if style.should_draw_stroke() {
        style.stroke_options().write_drawing_options_to_renderer(r);
        let (x0, y0) = project(0);
        r.move_to(x0, y0);
        for i in 1..values.len() {
            let (x, y) = project(i);
            r.line_to(x, y);
        }
        r.stroke();
    }

    if style.should_draw_dot() {
        style.dot_options().write_drawing_options_to_renderer(r);
        let radius = style.dot_width / 2.0;
        for i in 0..values.len() {
            let (x, y) = project(i);
            r.circle(radius, x, y);
        }
    }
}
