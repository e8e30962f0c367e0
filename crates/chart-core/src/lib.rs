// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; renderer contract, styles and computed series.

pub mod draw;
pub mod error;
pub mod geometry;
pub mod moving_average;
pub mod range;
pub mod renderer;
pub mod ring_buffer;
pub mod series;
pub mod style;

pub use error::{ChartError, ChartResult};
pub use geometry::{normalize_text_bounds, RectI32};
pub use moving_average::{MovingAverageSession, SimpleMovingAverageSeries, DEFAULT_MOVING_AVERAGE_WINDOW_SIZE};
pub use range::ContinuousRange;
pub use renderer::{Renderer, DEFAULT_DPI};
pub use ring_buffer::RingBuffer;
pub use series::{Series, ValueProvider, YAxisType};
pub use style::Style;
