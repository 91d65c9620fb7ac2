#[cfg(feature="render_term")]
mod render_term {
    use crate::buffer::*;
    use crate::error::*;
    use crate::pixel::*;

    use std::io::{Write};

    impl PixelBuffer<U8RgbaPixel> {
        ///
        /// Writes this buffer as an inline image using the iTerm escape sequence
        ///
        /// Terminals that don't understand the sequence will generally ignore it
        ///
        pub fn write_iterm_image<TStream>(&self, mut target: TStream) -> Result<(), RasterError>
        where
            TStream: Write,
        {
            use base64::engine::{Engine};
            use base64::engine::general_purpose;

            let mut png_data: Vec<u8> = vec![];
            self.write_png(&mut png_data)?;

            let base64 = general_purpose::STANDARD_NO_PAD.encode(&png_data);
            write!(target, "\x1b]1337;File=inline=1:{}\x07", base64)?;

            Ok(())
        }
    }
}
