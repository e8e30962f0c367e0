// File: crates/chart-core/src/moving_average.rs
// Summary: Simple moving-average series computed lazily over an inner value provider.
// Notes:
// - `value` keeps one shared window buffer and expects indices 0, 1, 2, ... in
//   order; requesting index 0 starts a new pass. Use `session` for an explicit
//   traversal that owns its own buffer.

use std::cell::RefCell;
use std::fmt;

use crate::draw;
use crate::geometry::RectI32;
use crate::range::ContinuousRange;
use crate::renderer::Renderer;
use crate::ring_buffer::RingBuffer;
use crate::series::{ValueProvider, YAxisType};
use crate::style::Style;

/// Number of samples averaged when no window size is configured.
pub const DEFAULT_MOVING_AVERAGE_WINDOW_SIZE: usize = 5;

/// Trailing-window average of another series.
pub struct SimpleMovingAverageSeries {
    pub name: String,
    pub style: Style,
    pub y_axis: YAxisType,
    /// Zero selects the default window.
    pub window_size: usize,
    pub inner_series: Option<Box<dyn ValueProvider>>,

    value_buffer: RefCell<Option<RingBuffer<f64>>>,
}

impl SimpleMovingAverageSeries {
    pub fn new(name: impl Into<String>, inner: impl ValueProvider + 'static) -> Self {
        Self {
            name: name.into(),
            style: Style::default(),
            y_axis: YAxisType::Primary,
            window_size: 0,
            inner_series: Some(Box::new(inner)),
            value_buffer: RefCell::new(None),
        }
    }

    /// A series with nothing to average; every lookup yields `(0.0, 0.0)`.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: Style::default(),
            y_axis: YAxisType::Primary,
            window_size: 0,
            inner_series: None,
            value_buffer: RefCell::new(None),
        }
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_y_axis(mut self, y_axis: YAxisType) -> Self {
        self.y_axis = y_axis;
        self
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn style(&self) -> &Style { &self.style }
    pub fn y_axis(&self) -> YAxisType { self.y_axis }

    /// Configured window if nonzero, else a nonzero `default`, else
    /// [`DEFAULT_MOVING_AVERAGE_WINDOW_SIZE`].
    pub fn window_size(&self, default: Option<usize>) -> usize {
        if self.window_size != 0 {
            return self.window_size;
        }
        match default {
            Some(size) if size != 0 => size,
            _ => DEFAULT_MOVING_AVERAGE_WINDOW_SIZE,
        }
    }

    /// Average of the final window, recomputed from the inner series.
    /// Does not touch the buffer used by `value`.
    pub fn last_value(&self) -> (f64, f64) {
        let Some(inner) = self.inner_series.as_deref() else {
            return (0.0, 0.0);
        };
        let window = self.window_size(None);
        let len = inner.len();
        let start_at = len.saturating_sub(window);

        let mut buffer = RingBuffer::with_capacity(window);
        let mut x = 0.0;
        for index in start_at..len {
            let (xn, yn) = inner.value(index);
            buffer.enqueue(yn);
            x = xn;
        }
        (x, average(&buffer))
    }

    /// Start an explicit pass over the smoothed values, beginning at index 0.
    pub fn session(&self) -> MovingAverageSession<'_> {
        let window = self.window_size(None);
        MovingAverageSession {
            inner: self.inner_series.as_deref(),
            window,
            buffer: RingBuffer::with_capacity(window),
            next_index: 0,
        }
    }

    /// Draw as a line series; unset style fields come from `defaults`.
    pub fn render(
        &self,
        r: &mut dyn Renderer,
        canvas_box: RectI32,
        x_range: &ContinuousRange,
        y_range: &ContinuousRange,
        defaults: &Style,
    ) {
        let style = self.style.with_defaults_from(defaults);
        draw::line_series(r, canvas_box, x_range, y_range, &style, self);
    }
}

impl ValueProvider for SimpleMovingAverageSeries {
    fn len(&self) -> usize {
        self.inner_series.as_deref().map_or(0, |inner| inner.len())
    }

    fn value(&self, index: usize) -> (f64, f64) {
        let Some(inner) = self.inner_series.as_deref() else {
            return (0.0, 0.0);
        };
        let window = self.window_size(None);
        let mut slot = self.value_buffer.borrow_mut();
        if index == 0 || slot.is_none() {
            tracing::trace!(series = %self.name, window, "moving average pass reset");
            *slot = Some(RingBuffer::with_capacity(window));
        }
        let buffer = slot.get_or_insert_with(|| RingBuffer::with_capacity(window));
        let (x, y) = inner.value(index);
        (x, push_sample(buffer, window, y))
    }
}

impl fmt::Debug for SimpleMovingAverageSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleMovingAverageSeries")
            .field("name", &self.name)
            .field("style", &self.style)
            .field("y_axis", &self.y_axis)
            .field("window_size", &self.window_size)
            .field("inner_len", &self.inner_series.as_deref().map(|inner| inner.len()))
            .finish()
    }
}

/// One sequential pass over a moving-average series.
///
/// Owns its window buffer, so several sessions over the same series never
/// interfere with each other or with `SimpleMovingAverageSeries::value`.
pub struct MovingAverageSession<'a> {
    inner: Option<&'a dyn ValueProvider>,
    window: usize,
    buffer: RingBuffer<f64>,
    next_index: usize,
}

impl MovingAverageSession<'_> {
    pub fn window_size(&self) -> usize { self.window }

    /// Index of the sample the next call to `next` will consume.
    pub fn next_index(&self) -> usize { self.next_index }
}

impl Iterator for MovingAverageSession<'_> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let inner = self.inner?;
        if self.next_index >= inner.len() {
            return None;
        }
        let (x, y) = inner.value(self.next_index);
        self.next_index += 1;
        Some((x, push_sample(&mut self.buffer, self.window, y)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.inner.map_or(0, |inner| inner.len().saturating_sub(self.next_index));
        (remaining, Some(remaining))
    }
}

// Evict before insert so the buffer never exceeds `window` samples.
fn push_sample(buffer: &mut RingBuffer<f64>, window: usize, y: f64) -> f64 {
    if buffer.len() >= window {
        buffer.dequeue();
    }
    buffer.enqueue(y);
    average(buffer)
}

// NaN samples are left out of the sum but still count toward the divisor.
fn average(buffer: &RingBuffer<f64>) -> f64 {
    if buffer.is_empty() {
        return 0.0;
    }
    let sum: f64 = buffer.iter().filter(|v| !v.is_nan()).sum();
    sum / buffer.len() as f64
}
