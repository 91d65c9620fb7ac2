use super::frame_size::*;
use crate::error::*;

use tracing::{debug};

use std::ops::{Index, IndexMut};
use std::slice;

///
/// A 2D buffer of pixels of any type
///
/// Pixels are stored in a single allocation in row-major order: the pixel at `(x, y)` is found at `y * width + x`.
/// The size of the buffer is fixed when it is created.
///
/// Reading or writing outside of the buffer is a programming error and will panic.
///
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer<TPixel> {
    width:  usize,
    height: usize,
    data:   Vec<TPixel>,
}

impl<TPixel> PixelBuffer<TPixel>
where
    TPixel: Copy,
{
    ///
    /// Creates a new pixel buffer with every pixel set to `fill_value`
    ///
    /// Panics if either dimension is 0: use `try_new()` when the size comes from somewhere that can't be trusted.
    ///
    pub fn new(width: usize, height: usize, fill_value: TPixel) -> PixelBuffer<TPixel> {
        assert!(width > 0 && height > 0, "Cannot create a {}x{} pixel buffer", width, height);

        debug!(width, height, "Creating pixel buffer");

        PixelBuffer {
            width:  width,
            height: height,
            data:   vec![fill_value; width*height],
        }
    }

    ///
    /// Creates a new pixel buffer, returning an error if it would contain no pixels
    ///
    pub fn try_new(width: usize, height: usize, fill_value: TPixel) -> Result<PixelBuffer<TPixel>, RasterError> {
        if width == 0 || height == 0 {
            Err(RasterError::EmptyFrame { width, height })
        } else {
            Ok(Self::new(width, height, fill_value))
        }
    }

    ///
    /// Creates a new pixel buffer of the specified size
    ///
    #[inline]
    pub fn with_size(size: FrameSize, fill_value: TPixel) -> PixelBuffer<TPixel> {
        Self::new(size.width, size.height, fill_value)
    }

    ///
    /// Reads the pixel at the specified coordinates
    ///
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> TPixel {
        self.data[self.offset(x, y)]
    }

    ///
    /// Replaces the pixel at the specified coordinates
    ///
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: TPixel) {
        let offset = self.offset(x, y);
        self.data[offset] = value;
    }

    ///
    /// Sets every pixel in this buffer to the same value
    ///
    #[inline]
    pub fn fill(&mut self, value: TPixel) {
        self.data.iter_mut().for_each(|pixel| *pixel = value);
    }
}

impl<TPixel> PixelBuffer<TPixel> {
    /// The width of this buffer in pixels
    #[inline]
    pub fn width(&self) -> usize { self.width }

    /// The height of this buffer in pixels
    #[inline]
    pub fn height(&self) -> usize { self.height }

    /// The size of this buffer
    #[inline]
    pub fn size(&self) -> FrameSize { FrameSize::new(self.width, self.height) }

    ///
    /// Returns true if the specified coordinates are inside this buffer
    ///
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.size().contains(x, y)
    }

    ///
    /// Returns the offset into the data for the pixel at a particular coordinate
    ///
    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width && y < self.height, "Pixel ({}, {}) is outside of a {}x{} buffer", x, y, self.width, self.height);

        y * self.width + x
    }

    ///
    /// Retrieves a single row from this buffer
    ///
    #[inline]
    pub fn row(&self, y: usize) -> &[TPixel] {
        assert!(y < self.height, "Row {} is outside of a buffer with {} rows", y, self.height);

        let start = y * self.width;
        &self.data[start..(start + self.width)]
    }

    ///
    /// Retrieves a single row from this buffer for editing
    ///
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [TPixel] {
        assert!(y < self.height, "Row {} is outside of a buffer with {} rows", y, self.height);

        let start = y * self.width;
        &mut self.data[start..(start + self.width)]
    }

    ///
    /// Iterates over the rows in this buffer, from top to bottom
    ///
    #[inline]
    pub fn rows(&self) -> slice::Chunks<'_, TPixel> {
        self.data.chunks(self.width)
    }

    /// All the pixels in this buffer, in row-major order
    #[inline]
    pub fn pixels(&self) -> &[TPixel] {
        &self.data
    }

    /// All the pixels in this buffer, in row-major order, for editing
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [TPixel] {
        &mut self.data
    }

    ///
    /// Takes the pixel data out of this buffer
    ///
    #[inline]
    pub fn into_pixels(self) -> Vec<TPixel> {
        self.data
    }
}

impl<TPixel> Index<(usize, usize)> for PixelBuffer<TPixel> {
    type Output = TPixel;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &TPixel {
        &self.data[self.offset(x, y)]
    }
}

impl<TPixel> IndexMut<(usize, usize)> for PixelBuffer<TPixel> {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut TPixel {
        let offset = self.offset(x, y);
        &mut self.data[offset]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn distinct_coordinates_use_distinct_slots() {
        // (2, 3) and (3, 2) collide if the offset is calculated as x*y+y
        let mut buffer = PixelBuffer::new(4, 5, 0u32);
        buffer.set(2, 3, 1);
        buffer.set(3, 2, 2);

        assert!(buffer.get(2, 3) == 1);
        assert!(buffer.get(3, 2) == 2);
    }

    #[test]
    fn storage_is_row_major() {
        let mut buffer = PixelBuffer::new(3, 2, 0u8);
        buffer.set(1, 0, 1);
        buffer.set(0, 1, 2);
        buffer.set(2, 1, 3);

        assert!(buffer.pixels() == &[0, 1, 0, 2, 0, 3], "Unexpected layout {:?}", buffer.pixels());
        assert!(buffer.row(1) == &[2, 0, 3]);
    }
}
