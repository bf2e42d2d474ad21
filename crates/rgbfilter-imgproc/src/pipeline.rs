use std::{fmt, str::FromStr, time::Instant};

use rgbfilter_image::Image;
use thiserror::Error;

use crate::{color, filter, flip};

/// Errors that can occur while selecting filters.
#[derive(Error, Debug, PartialEq)]
pub enum PipelineError {
    /// The filter name is not one of the known filters.
    #[error("unknown filter: {0:?}, expected one of grayscale (g), reflect (r), blur (b), edges (e)")]
    UnknownFilter(String),
}

/// The in-place filters the engine provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Average the three channels of every pixel. See [`color::grayscale`].
    Grayscale,
    /// Mirror the image left to right. See [`flip::reflect`].
    Reflect,
    /// 3x3 box blur. See [`filter::blur`].
    Blur,
    /// Sobel edge detection. See [`filter::edges`].
    Edges,
}

impl Filter {
    /// All filters, in flag order.
    pub const ALL: [Filter; 4] = [
        Filter::Grayscale,
        Filter::Reflect,
        Filter::Blur,
        Filter::Edges,
    ];

    /// The filter name, as accepted by [`Filter::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Grayscale => "grayscale",
            Filter::Reflect => "reflect",
            Filter::Blur => "blur",
            Filter::Edges => "edges",
        }
    }

    /// The single-letter command-line flag for the filter.
    pub fn flag(&self) -> char {
        match self {
            Filter::Grayscale => 'g',
            Filter::Reflect => 'r',
            Filter::Blur => 'b',
            Filter::Edges => 'e',
        }
    }

    /// Apply the filter to `image` in place.
    pub fn apply(&self, image: &mut Image) {
        match self {
            Filter::Grayscale => color::grayscale(image),
            Filter::Reflect => flip::reflect(image),
            Filter::Blur => filter::blur(image),
            Filter::Edges => filter::edges(image),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = PipelineError;

    /// Parse a filter from its name or its single-letter flag, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Filter::ALL
            .into_iter()
            .find(|filter| key == filter.name() || key == filter.flag().to_string())
            .ok_or_else(|| PipelineError::UnknownFilter(s.to_string()))
    }
}

/// Apply a chain of filters to `image`, in order.
///
/// # Example
///
/// ```
/// use rgbfilter_image::{Image, Pixel};
/// use rgbfilter_imgproc::pipeline::{apply_filters, Filter};
///
/// let mut image = Image::from_size_val([3, 3].into(), Pixel::rgb(255, 0, 0)).unwrap();
///
/// apply_filters(&mut image, &[Filter::Blur, Filter::Grayscale]);
/// assert!(image.as_slice().iter().all(|p| *p == Pixel::gray(85)));
/// ```
pub fn apply_filters(image: &mut Image, filters: &[Filter]) {
    for filter in filters {
        let start = Instant::now();
        filter.apply(image);
        log::debug!(
            "applied {} to {} in {:?}",
            filter,
            image.size(),
            start.elapsed()
        );
    }
}
