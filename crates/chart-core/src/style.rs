// File: crates/chart-core/src/style.rs
// Summary: Immutable style snapshot applied by renderers at draw time.

use std::fmt;

use skia_safe as skia;

use crate::renderer::Renderer;

/// Stroke, fill, dot and font settings.
///
/// A style is a value: builders return a new snapshot and renderers replace
/// their current snapshot wholesale. A transparent color or a zero width means
/// "unset" for defaulting and for the `should_draw_*` checks.
#[derive(Clone)]
pub struct Style {
    pub hidden: bool,
    pub stroke_color: skia::Color,
    pub stroke_width: f64,
    pub stroke_dash_array: Vec<f64>,
    pub fill_color: skia::Color,
    pub dot_color: skia::Color,
    pub dot_width: f64,
    pub font: Option<skia::Typeface>,
    pub font_size: f64,
    pub font_color: skia::Color,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            hidden: false,
            stroke_color: skia::Color::TRANSPARENT,
            stroke_width: 0.0,
            stroke_dash_array: Vec::new(),
            fill_color: skia::Color::TRANSPARENT,
            dot_color: skia::Color::TRANSPARENT,
            dot_width: 0.0,
            font: None,
            font_size: 0.0,
            font_color: skia::Color::TRANSPARENT,
        }
    }
}

fn is_unset(color: skia::Color) -> bool {
    color == skia::Color::TRANSPARENT
}

impl Style {
    pub fn new() -> Self { Self::default() }

    pub fn with_stroke_color(self, stroke_color: skia::Color) -> Self {
        Self { stroke_color, ..self }
    }
    pub fn with_stroke_width(self, stroke_width: f64) -> Self {
        Self { stroke_width, ..self }
    }
    pub fn with_stroke_dash_array(self, stroke_dash_array: Vec<f64>) -> Self {
        Self { stroke_dash_array, ..self }
    }
    pub fn with_fill_color(self, fill_color: skia::Color) -> Self {
        Self { fill_color, ..self }
    }
    pub fn with_dot_color(self, dot_color: skia::Color) -> Self {
        Self { dot_color, ..self }
    }
    pub fn with_dot_width(self, dot_width: f64) -> Self {
        Self { dot_width, ..self }
    }
    pub fn with_font(self, font: Option<skia::Typeface>) -> Self {
        Self { font, ..self }
    }
    pub fn with_font_size(self, font_size: f64) -> Self {
        Self { font_size, ..self }
    }
    pub fn with_font_color(self, font_color: skia::Color) -> Self {
        Self { font_color, ..self }
    }
    pub fn with_hidden(self, hidden: bool) -> Self {
        Self { hidden, ..self }
    }

    /// Fill every unset field from `defaults`. `hidden` is never inherited.
    pub fn with_defaults_from(&self, defaults: &Style) -> Style {
        let pick_color = |own: skia::Color, fallback: skia::Color| if is_unset(own) { fallback } else { own };
        let pick_width = |own: f64, fallback: f64| if own == 0.0 { fallback } else { own };
        Style {
            hidden: self.hidden,
            stroke_color: pick_color(self.stroke_color, defaults.stroke_color),
            stroke_width: pick_width(self.stroke_width, defaults.stroke_width),
            stroke_dash_array: if self.stroke_dash_array.is_empty() {
                defaults.stroke_dash_array.clone()
            } else {
                self.stroke_dash_array.clone()
            },
            fill_color: pick_color(self.fill_color, defaults.fill_color),
            dot_color: pick_color(self.dot_color, defaults.dot_color),
            dot_width: pick_width(self.dot_width, defaults.dot_width),
            font: self.font.clone().or_else(|| defaults.font.clone()),
            font_size: pick_width(self.font_size, defaults.font_size),
            font_color: pick_color(self.font_color, defaults.font_color),
        }
    }

    pub fn should_draw_stroke(&self) -> bool {
        !is_unset(self.stroke_color) && self.stroke_width > 0.0
    }

    pub fn should_draw_fill(&self) -> bool {
        !is_unset(self.fill_color)
    }

    pub fn should_draw_dot(&self) -> bool {
        !is_unset(self.dot_color) && self.dot_width > 0.0
    }

    /// Only the stroke fields; fill is cleared.
    pub fn stroke_options(&self) -> Style {
        Style {
            stroke_color: self.stroke_color,
            stroke_width: self.stroke_width,
            stroke_dash_array: self.stroke_dash_array.clone(),
            ..Style::default()
        }
    }

    /// Only the fill color.
    pub fn fill_options(&self) -> Style {
        Style { fill_color: self.fill_color, ..Style::default() }
    }

    /// Dots are drawn with `circle`, so dot color doubles as stroke and fill.
    pub fn dot_options(&self) -> Style {
        Style {
            stroke_color: self.dot_color,
            stroke_width: 1.0,
            fill_color: self.dot_color,
            ..Style::default()
        }
    }

    /// Push the stroke and fill fields into `r`.
    pub fn write_drawing_options_to_renderer(&self, r: &mut dyn Renderer) {
        r.set_stroke_color(self.stroke_color);
        r.set_stroke_width(self.stroke_width);
        r.set_stroke_dash_array(&self.stroke_dash_array);
        r.set_fill_color(self.fill_color);
    }

    /// Push the font fields into `r`.
    pub fn write_text_options_to_renderer(&self, r: &mut dyn Renderer) {
        r.set_font(self.font.clone());
        r.set_font_size(self.font_size);
        r.set_font_color(self.font_color);
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Style")
            .field("hidden", &self.hidden)
            .field("stroke_color", &self.stroke_color)
            .field("stroke_width", &self.stroke_width)
            .field("stroke_dash_array", &self.stroke_dash_array)
            .field("fill_color", &self.fill_color)
            .field("dot_color", &self.dot_color)
            .field("dot_width", &self.dot_width)
            .field("font", &self.font.as_ref().map(|tf| tf.family_name()))
            .field("font_size", &self.font_size)
            .field("font_color", &self.font_color)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_only_unset_fields() {
        let own = Style::new()
            .with_stroke_color(skia::Color::RED)
            .with_hidden(true);
        let defaults = Style::new()
            .with_stroke_color(skia::Color::BLUE)
            .with_stroke_width(2.0)
            .with_stroke_dash_array(vec![4.0, 2.0])
            .with_font_size(10.0);

        let merged = own.with_defaults_from(&defaults);
        assert_eq!(merged.stroke_color, skia::Color::RED);
        assert_eq!(merged.stroke_width, 2.0);
        assert_eq!(merged.stroke_dash_array, vec![4.0, 2.0]);
        assert_eq!(merged.font_size, 10.0);
        assert!(merged.hidden);
        assert!(!defaults.with_defaults_from(&own).hidden);
    }

    #[test]
    fn draw_checks_need_color_and_width() {
        let style = Style::new().with_stroke_color(skia::Color::BLACK);
        assert!(!style.should_draw_stroke());
        assert!(style.clone().with_stroke_width(1.0).should_draw_stroke());
        assert!(!style.should_draw_fill());
        assert!(style.with_fill_color(skia::Color::WHITE).should_draw_fill());
        assert!(Style::new().with_dot_color(skia::Color::GREEN).with_dot_width(3.0).should_draw_dot());
    }

    #[test]
    fn option_subsets_drop_other_fields() {
        let style = Style::new()
            .with_stroke_color(skia::Color::RED)
            .with_stroke_width(3.0)
            .with_fill_color(skia::Color::BLUE);
        let stroke = style.stroke_options();
        assert_eq!(stroke.stroke_width, 3.0);
        assert_eq!(stroke.fill_color, skia::Color::TRANSPARENT);
        let fill = style.fill_options();
        assert_eq!(fill.fill_color, skia::Color::BLUE);
        assert_eq!(fill.stroke_width, 0.0);
    }
}
