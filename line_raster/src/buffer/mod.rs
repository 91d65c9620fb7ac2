//!
//! # Buffers
//!
//! Buffers store a value for every point in a fixed-size grid. `PixelBuffer` is the usual 2D target, and
//! `VoxelBuffer` can be used when the z coordinate of a rasterized line matters. Both can be drawn into through
//! the `Canvas` and `VoxelCanvas` traits, which is all the drawing functions need to know about them.
//!

mod frame_size;
mod pixel_buffer;
mod voxel_buffer;
mod canvas_trait;

pub use frame_size::*;
pub use pixel_buffer::*;
pub use voxel_buffer::*;
pub use canvas_trait::*;
