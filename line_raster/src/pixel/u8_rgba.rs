use std::slice;

///
/// An RGBA pixel as a set of u8 values
///
/// The alpha value is not pre-multiplied: this is the layout a PNG file stores, so a buffer of these pixels can be
/// written out as-is.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct U8RgbaPixel([u8; 4]);

impl U8RgbaPixel {
    /// Fully transparent black
    pub const TRANSPARENT: U8RgbaPixel  = U8RgbaPixel([0, 0, 0, 0]);

    /// Opaque black
    pub const BLACK: U8RgbaPixel        = U8RgbaPixel([0, 0, 0, 255]);

    /// Opaque white
    pub const WHITE: U8RgbaPixel        = U8RgbaPixel([255, 255, 255, 255]);

    ///
    /// Creates a new pixel from its R, G, B, A components
    ///
    #[inline]
    pub const fn from_components(components: [u8; 4]) -> Self {
        U8RgbaPixel(components)
    }

    ///
    /// Creates an opaque pixel from its R, G, B components
    ///
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        U8RgbaPixel([r, g, b, 255])
    }

    ///
    /// Retrieves the RGBA values from this pixel
    ///
    #[inline]
    pub fn get_components(&self) -> [u8; 4] {
        self.0
    }

    /// The alpha component of this pixel
    #[inline]
    pub fn alpha(&self) -> u8 {
        self.0[3]
    }
}

impl Default for U8RgbaPixel {
    #[inline]
    fn default() -> Self {
        U8RgbaPixel::TRANSPARENT
    }
}

///
/// Colours are often written as a packed `0xRRGGBBAA` value
///
impl From<u32> for U8RgbaPixel {
    #[inline]
    fn from(packed: u32) -> U8RgbaPixel {
        U8RgbaPixel(packed.to_be_bytes())
    }
}

impl From<U8RgbaPixel> for u32 {
    #[inline]
    fn from(pixel: U8RgbaPixel) -> u32 {
        u32::from_be_bytes(pixel.0)
    }
}

pub trait ToRgbaU8Slice {
    /// Returns the pixels as a single slice of u8 values
    fn to_rgba_u8_slice(&self) -> &[u8];

    /// Returns the pixels as a mutable single slice of u8 values
    fn to_rgba_u8_slice_mut(&mut self) -> &mut [u8];
}

pub trait ToRgbaPixels {
    /// Converts a slice of `u8` values to a slice of U8RgbaPixels
    ///
    /// If the slice is not a multiple of 4, then no pixels are generated at the end
    fn to_rgba_slice(&self) -> &[U8RgbaPixel];

    /// Converts a slice of `u8` values to a mutable slice of U8RgbaPixels
    fn to_rgba_slice_mut(&mut self) -> &mut [U8RgbaPixel];
}

impl ToRgbaU8Slice for [U8RgbaPixel] {
    #[inline]
    fn to_rgba_u8_slice(&self) -> &[u8] {
        // U8RgbaPixel is repr(C) around [u8; 4], so it has the same layout as 4 bytes
        unsafe {
            let len     = self.len();
            let data    = self.as_ptr() as *const u8;

            slice::from_raw_parts(data, len*4)
        }
    }

    #[inline]
    fn to_rgba_u8_slice_mut(&mut self) -> &mut [u8] {
        unsafe {
            let len     = self.len();
            let data    = self.as_mut_ptr() as *mut u8;

            slice::from_raw_parts_mut(data, len*4)
        }
    }
}

impl ToRgbaPixels for [u8] {
    #[inline]
    fn to_rgba_slice(&self) -> &[U8RgbaPixel] {
        // Alignment of U8RgbaPixel is 1, so any byte slice can be viewed this way
        unsafe {
            let len     = self.len();
            let data    = self.as_ptr() as *const U8RgbaPixel;

            slice::from_raw_parts(data, len/4)
        }
    }

    #[inline]
    fn to_rgba_slice_mut(&mut self) -> &mut [U8RgbaPixel] {
        unsafe {
            let len     = self.len();
            let data    = self.as_mut_ptr() as *mut U8RgbaPixel;

            slice::from_raw_parts_mut(data, len/4)
        }
    }
}
