use thiserror::Error;

///
/// Errors that can be reported back to the caller
///
/// Coordinates outside of a buffer are a programming error and panic instead of being reported here.
///
#[derive(Debug, Error)]
pub enum RasterError {
    /// A buffer was requested with no pixels in it
    #[error("cannot create a {width}x{height} buffer: both dimensions must be at least 1")]
    EmptyFrame { width: usize, height: usize },

    /// A buffer is too big for the PNG format (which stores its dimensions as u32 values)
    #[error("a {width}x{height} buffer is too large to encode")]
    FrameTooLarge { width: usize, height: usize },

    /// The stream an image was being written to failed
    #[error("could not write image data: {0}")]
    Io(#[from] std::io::Error),

    /// The image encoder failed
    #[error("could not encode image data: {0}")]
    Encoding(#[source] Box<dyn std::error::Error + Send + Sync>),
}
