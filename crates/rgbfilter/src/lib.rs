//! In-place 3x3 pixel filters over 8-bit RGB images.
//!
//! * [`image`]: the [`Pixel`](image::Pixel) and [`Image`](image::Image) types.
//! * [`imgproc`]: grayscale, reflect, box blur and Sobel edge detection.
//!
//! ```
//! use rgbfilter::image::{Image, Pixel};
//! use rgbfilter::imgproc::pipeline::Filter;
//!
//! let mut image = Image::from_size_val([3, 3].into(), Pixel::rgb(255, 0, 0)).unwrap();
//! Filter::Grayscale.apply(&mut image);
//!
//! assert_eq!(image[[1, 1]], Pixel::gray(85));
//! ```

#[doc(inline)]
pub use rgbfilter_image as image;

#[doc(inline)]
pub use rgbfilter_imgproc as imgproc;
