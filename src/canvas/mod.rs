//! The drawing surface and the algorithms that draw on it
//!
//! - [`grid`]: the [`Canvas`] character buffer with its bounds-checked plotting primitive
//! - [`raster`]: integer line and circle rasterization over the [`Plot`] trait
//!
//! # Clipping
//!
//! Every write goes through [`Canvas::plot`], which silently discards points that fall
//! outside the grid. Off-canvas geometry is never an error: a circle centred near an edge
//! simply draws the part that fits.

pub mod grid;
pub mod raster;

pub use grid::{Canvas, CanvasError, Limits};
pub use raster::Plot;
