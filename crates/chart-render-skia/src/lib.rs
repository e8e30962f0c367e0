// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer crate. Hosts the CPU raster surface implementation of `chart_core::Renderer`.

mod raster;

pub use raster::{circle_path, RasterOptions, RasterRenderer};
