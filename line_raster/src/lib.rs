//!
//! # flo_line_raster
//!
//! `flo_line_raster` turns lines between integer points into the sequence of pixels (or voxels) that should be
//! drawn to represent them. A `LineRasterizer` walks from one 3D point to another one lattice point at a time,
//! using only integer arithmetic, and the points it generates can be written to any `Canvas`, such as the
//! generic `PixelBuffer`.
//!
//! ```
//! # use flo_line_raster::*;
//! let mut canvas = PixelBuffer::new(16, 16, 0u32);
//! draw_line(&mut canvas, Vector3::new(0, 0, 0), Vector3::new(10, 5, -4), 0xffffffff);
//!
//! assert!(canvas.get(10, 5) == 0xffffffff);
//! ```
//!
//! # Features
//!
//! * `render_png` - adds `PixelBuffer::write_png()` for buffers of `U8RgbaPixel`s (enabled by default)
//! * `render_term` - adds `PixelBuffer::write_iterm_image()`, which displays a buffer inline in terminals that support the iTerm image protocol (implies `render_png`)
//!
#![warn(bare_trait_objects)]

mod error;
mod render;

/// Points on the integer lattice
pub mod geo;

/// A pixel models a single colour sample that can be stored in a buffer
pub mod pixel;

/// Buffers store a value for every pixel in a frame, and can be drawn on using the `Canvas` trait
pub mod buffer;

/// Rasterization converts a line into the set of points that should be drawn to represent it
pub mod raster;

pub use error::*;
pub use geo::*;
pub use pixel::*;
pub use buffer::*;
pub use raster::*;
