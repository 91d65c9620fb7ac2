use super::pixel_buffer::*;
use super::voxel_buffer::*;

///
/// Trait implemented by anything that can have individual pixels written to it
///
pub trait Canvas {
    /// The type of value written for each pixel
    type Pixel;

    ///
    /// Sets the pixel at the specified position
    ///
    /// Coordinates outside of the canvas are a programming error: implementations are free to panic
    ///
    fn set_pixel(&mut self, x: usize, y: usize, color: Self::Pixel);
}

///
/// Trait implemented by 3D targets that can have individual voxels written to them
///
pub trait VoxelCanvas {
    /// The type of value written for each voxel
    type Pixel;

    /// Sets the voxel at the specified position
    fn set_voxel(&mut self, x: usize, y: usize, z: usize, color: Self::Pixel);
}

impl<TPixel> Canvas for PixelBuffer<TPixel>
where
    TPixel: Copy,
{
    type Pixel = TPixel;

    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: TPixel) {
        self.set(x, y, color)
    }
}

impl<TPixel> VoxelCanvas for VoxelBuffer<TPixel>
where
    TPixel: Copy,
{
    type Pixel = TPixel;

    #[inline]
    fn set_voxel(&mut self, x: usize, y: usize, z: usize, color: TPixel) {
        self.set(x, y, z, color)
    }
}
