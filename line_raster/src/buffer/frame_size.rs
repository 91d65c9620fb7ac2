///
/// Describes the size of a frame in pixels
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameSize {
    pub width:  usize,
    pub height: usize,
}

impl FrameSize {
    ///
    /// Creates a frame size from a width and a height
    ///
    #[inline]
    pub const fn new(width: usize, height: usize) -> FrameSize {
        FrameSize { width, height }
    }

    /// The number of pixels in a frame of this size
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// True if a frame of this size has no pixels in it
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    ///
    /// True if the specified coordinate is inside a frame of this size
    ///
    /// Negative coordinates are never inside the frame
    ///
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < (self.width as u64) && (y as u64) < (self.height as u64)
    }
}

impl From<(usize, usize)> for FrameSize {
    #[inline]
    fn from((width, height): (usize, usize)) -> FrameSize {
        FrameSize { width, height }
    }
}
