#[cfg(feature="render_png")]
mod render_png {
    use crate::buffer::*;
    use crate::error::*;
    use crate::pixel::*;

    use tracing::{debug};

    use std::convert::{TryFrom};
    use std::io::{Write, BufWriter};

    impl From<png::EncodingError> for RasterError {
        fn from(err: png::EncodingError) -> RasterError {
            RasterError::Encoding(Box::new(err))
        }
    }

    impl PixelBuffer<U8RgbaPixel> {
        ///
        /// Writes the contents of this buffer to a stream as an 8-bit RGBA PNG file
        ///
        pub fn write_png<TStream>(&self, target: TStream) -> Result<(), RasterError>
        where
            TStream: Write,
        {
            let too_large   = || RasterError::FrameTooLarge { width: self.width(), height: self.height() };
            let width       = u32::try_from(self.width()).map_err(|_| too_large())?;
            let height      = u32::try_from(self.height()).map_err(|_| too_large())?;

            let mut stream  = BufWriter::new(target);
            let mut encoder = png::Encoder::new(&mut stream, width, height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            // Rows are stored top to bottom, which is also the order PNG wants them in
            let mut writer = encoder.write_header()?;
            writer.write_image_data(self.pixels().to_rgba_u8_slice())?;
            writer.finish()?;

            stream.flush()?;

            debug!(width, height, "Wrote PNG image");

            Ok(())
        }
    }
}
