// File: crates/chart-core/src/error.rs
// Summary: Error type shared by the renderer contract and its backends.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create raster surface: width={width}, height={height}")]
    SurfaceCreation { width: i32, height: i32 },

    #[error("failed to read back surface pixels")]
    PixelReadback,

    #[error("image encoding failed: {0}")]
    Encode(String),

    /// The destination writer failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
