//!
//! # Raster
//!
//! A `LineRasterizer` walks the integer lattice between two 3D points. It doesn't know anything about where
//! the points end up: the `draw_line()` family of functions pull the points and write them to a `Canvas` or
//! a `VoxelCanvas`, but any other sink can iterate over the rasterizer directly.
//!

mod line_rasterizer;
mod draw_line;

pub use line_rasterizer::*;
pub use draw_line::*;
