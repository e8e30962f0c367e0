// File: crates/chart-core/src/geometry.rs
// Summary: Integer pixel boxes and text-bounds normalization.

/// Pixel-space box. Used for canvas areas and text measurements.
/// An all-zero box returned by `Renderer::measure_text` means "unmeasurable".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// True when every edge is zero.
    pub const fn is_zero(&self) -> bool {
        self.left == 0 && self.top == 0 && self.right == 0 && self.bottom == 0
    }
}

/// Anchor raw glyph bounds at the top-left corner.
///
/// A negative left/top is shifted away (the far edge grows by its magnitude);
/// a positive left/top is folded into the far edge. Each edge is rounded up so
/// the box never under-covers the glyphs.
pub fn normalize_text_bounds(left: f64, top: f64, right: f64, bottom: f64) -> RectI32 {
    let (mut l, mut t, mut r, mut b) = (left, top, right, bottom);
    if l < 0.0 {
        r -= l;
        l = 0.0;
    }
    if t < 0.0 {
        b -= t;
        t = 0.0;
    }
    if l > 0.0 {
        r += l;
        l = 0.0;
    }
    if t > 0.0 {
        b += t;
        t = 0.0;
    }
    RectI32 {
        left: l.ceil() as i32,
        top: t.ceil() as i32,
        right: r.ceil() as i32,
        bottom: b.ceil() as i32,
    }
}
