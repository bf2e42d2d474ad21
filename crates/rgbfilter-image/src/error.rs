/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the dimensions are negative or do not match the pixel buffer.
    #[error("Invalid dimensions {width}x{height} for a buffer of {len} pixels")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: i64,
        /// Requested height in pixels.
        height: i64,
        /// Number of pixels actually supplied.
        len: usize,
    },

    /// Error when a raw buffer cannot be read as packed BGR triples.
    #[error("Invalid pixel buffer: {0} bytes is not a whole number of BGR pixels")]
    InvalidBuffer(usize),

    /// Error when the source and destination images differ in size.
    #[error("Source image size ({0}x{1}) does not match destination size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),
}
