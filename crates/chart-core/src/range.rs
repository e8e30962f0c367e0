// File: crates/chart-core/src/range.rs
// Summary: Continuous value range mapped onto a pixel domain.

/// Data interval `[min, max]` projected onto `domain` pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContinuousRange {
    pub min: f64,
    pub max: f64,
    pub domain: i32,
}

impl ContinuousRange {
    pub const fn new(min: f64, max: f64, domain: i32) -> Self {
        Self { min, max, domain }
    }

    /// Smallest range covering every y value of `values`.
    pub fn from_values(values: impl IntoIterator<Item = f64>, domain: i32) -> Self {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if min > max {
            return Self::new(0.0, 0.0, domain);
        }
        Self::new(min, max, domain)
    }

    pub fn delta(&self) -> f64 { self.max - self.min }

    pub fn is_zero(&self) -> bool { self.delta() == 0.0 }

    /// Pixel offset of `value` within the domain, rounded up.
    /// A degenerate range maps everything to 0.
    pub fn translate(&self, value: f64) -> i32 {
        if self.is_zero() {
            return 0;
        }
        let ratio = (value - self.min) / self.delta();
        (ratio * self.domain as f64).ceil() as i32
    }
}
