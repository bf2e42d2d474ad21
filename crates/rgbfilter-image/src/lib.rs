#![deny(missing_docs)]
//! Pixel and image types for the rgbfilter engine

/// image representation for pixel filtering.
pub mod image;

/// 8-bit BGR pixel type.
pub mod pixel;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::pixel::{saturate_u8, Pixel};
