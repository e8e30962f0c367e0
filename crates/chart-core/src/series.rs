// File: crates/chart-core/src/series.rs
// Summary: Value-provider contract and the plain (x, y) series that backs it.

use crate::style::Style;

/// Ordered, indexable source of `(x, y)` samples. Valid indices are `0..len()`.
pub trait ValueProvider {
    fn len(&self) -> usize;
    fn value(&self, index: usize) -> (f64, f64);

    fn is_empty(&self) -> bool { self.len() == 0 }
}

impl ValueProvider for [(f64, f64)] {
    fn len(&self) -> usize { <[(f64, f64)]>::len(self) }
    fn value(&self, index: usize) -> (f64, f64) { self[index] }
}

impl ValueProvider for Vec<(f64, f64)> {
    fn len(&self) -> usize { Vec::len(self) }
    fn value(&self, index: usize) -> (f64, f64) { self[index] }
}

impl<T: ValueProvider + ?Sized> ValueProvider for &T {
    fn len(&self) -> usize { (**self).len() }
    fn value(&self, index: usize) -> (f64, f64) { (**self).value(index) }
}

impl<T: ValueProvider + ?Sized> ValueProvider for Box<T> {
    fn len(&self) -> usize { (**self).len() }
    fn value(&self, index: usize) -> (f64, f64) { (**self).value(index) }
}

impl<T: ValueProvider + ?Sized> ValueProvider for std::rc::Rc<T> {
    fn len(&self) -> usize { (**self).len() }
    fn value(&self, index: usize) -> (f64, f64) { (**self).value(index) }
}

/// Which vertical axis a series is plotted against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum YAxisType {
    #[default]
    Primary,
    Secondary,
}

/// Named (x, y) data with its own drawing style.
#[derive(Clone, Debug, Default)]
pub struct Series {
    pub name: String,
    pub style: Style,
    pub y_axis: YAxisType,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn with_data(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), data_xy: data, ..Self::default() }
    }

    /// Build from parallel x and y columns; the shorter column bounds the length.
    pub fn from_columns(name: impl Into<String>, xs: &[f64], ys: &[f64]) -> Self {
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Self::with_data(name, data)
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.data_xy.push((x, y));
    }
}

impl ValueProvider for Series {
    fn len(&self) -> usize { self.data_xy.len() }
    fn value(&self, index: usize) -> (f64, f64) { self.data_xy[index] }
}
