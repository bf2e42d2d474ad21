use std::ops;

use crate::error::ImageError;
use crate::pixel::Pixel;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use rgbfilter_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// assert_eq!(image_size.area(), 200);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by this size, or `None` if it overflows `usize`.
    pub fn checked_area(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Number of pixels covered by this size, saturating at `usize::MAX`.
    pub fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Whether the size covers no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// An owned, row-major grid of [`Pixel`]s.
///
/// The size is fixed at construction; filters mutate the pixels in place but
/// never resize the grid. All accessors are bounds checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    size: ImageSize,
    data: Vec<Pixel>,
}

impl Image {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixels of the image in row-major order.
    ///
    /// # Errors
    ///
    /// If the number of pixels does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgbfilter_image::{Image, ImageSize, Pixel};
    ///
    /// let image = Image::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![Pixel::default(); 10 * 20],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.width(), 10);
    /// assert_eq!(image.height(), 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<Pixel>) -> Result<Self, ImageError> {
        if size.checked_area() != Some(data.len()) {
            return Err(ImageError::InvalidDimensions {
                width: size.width as i64,
                height: size.height as i64,
                len: data.len(),
            });
        }

        Ok(Self { size, data })
    }

    /// Create a new image with every pixel set to `val`.
    ///
    /// # Errors
    ///
    /// If `width * height` overflows, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgbfilter_image::{Image, ImageSize, Pixel};
    ///
    /// let image = Image::from_size_val([3, 2].into(), Pixel::rgb(255, 0, 0)).unwrap();
    ///
    /// assert_eq!(image.size(), ImageSize { width: 3, height: 2 });
    /// assert!(image.as_slice().iter().all(|p| p.red == 255));
    /// ```
    pub fn from_size_val(size: ImageSize, val: Pixel) -> Result<Self, ImageError> {
        let len = size.checked_area().ok_or(ImageError::InvalidDimensions {
            width: size.width as i64,
            height: size.height as i64,
            len: 0,
        })?;

        Ok(Self {
            size,
            data: vec![val; len],
        })
    }

    /// Create an image from signed dimensions as handed over by a file reader.
    ///
    /// # Errors
    ///
    /// Negative dimensions, or dimensions that disagree with the number of
    /// pixels, return [`ImageError::InvalidDimensions`].
    pub fn from_dims(height: i64, width: i64, data: Vec<Pixel>) -> Result<Self, ImageError> {
        let invalid = || ImageError::InvalidDimensions {
            width,
            height,
            len: data.len(),
        };

        let (Ok(w), Ok(h)) = (usize::try_from(width), usize::try_from(height)) else {
            return Err(invalid());
        };

        if w.checked_mul(h) != Some(data.len()) {
            return Err(invalid());
        }

        Ok(Self {
            size: ImageSize {
                width: w,
                height: h,
            },
            data,
        })
    }

    /// Create an image from a list of rows.
    ///
    /// # Errors
    ///
    /// If the rows are not all the same length, an error is returned.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, ImageError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if rows.iter().any(|row| row.len() != width) {
            return Err(ImageError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
                len: rows.iter().map(Vec::len).sum(),
            });
        }

        Self::new(
            ImageSize { width, height },
            rows.into_iter().flatten().collect(),
        )
    }

    /// Create an image from packed `[blue, green, red]` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidBuffer`] if the byte count is not a
    /// multiple of three, and [`ImageError::InvalidDimensions`] if the number
    /// of pixels does not match `size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgbfilter_image::{Image, Pixel};
    ///
    /// let image = Image::from_bgr_bytes([2, 1].into(), &[0, 0, 255, 255, 0, 0]).unwrap();
    ///
    /// assert_eq!(image.get(0, 0), Some(&Pixel::rgb(255, 0, 0)));
    /// assert_eq!(image.get(0, 1), Some(&Pixel::rgb(0, 0, 255)));
    /// ```
    pub fn from_bgr_bytes(size: ImageSize, bytes: &[u8]) -> Result<Self, ImageError> {
        if bytes.len() % 3 != 0 {
            return Err(ImageError::InvalidBuffer(bytes.len()));
        }

        let data = bytes
            .chunks_exact(3)
            .map(|bgr| Pixel::bgr(bgr[0], bgr[1], bgr[2]))
            .collect();

        Self::new(size, data)
    }

    /// Get the pixels as packed `[blue, green, red]` bytes.
    pub fn to_bgr_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|p| p.to_bgr()).collect()
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Whether the image holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the pixel at `row`, `col`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&Pixel> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        self.data.get(row * self.cols() + col)
    }

    /// Get a mutable reference to the pixel at `row`, `col`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Pixel> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        let cols = self.cols();
        self.data.get_mut(row * cols + col)
    }

    /// Get one row of pixels.
    pub fn row(&self, row: usize) -> Option<&[Pixel]> {
        if row >= self.rows() {
            return None;
        }
        let start = row * self.cols();
        self.data.get(start..start + self.cols())
    }

    /// Iterate over the rows of the image. Empty images yield no rows.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Pixel]> {
        self.data.chunks_exact(self.cols().max(1))
    }

    /// Iterate mutably over the rows of the image. Empty images yield no rows.
    pub fn rows_iter_mut(&mut self) -> impl Iterator<Item = &mut [Pixel]> {
        let cols = self.cols().max(1);
        self.data.chunks_exact_mut(cols)
    }

    /// Get the pixels in row-major order.
    pub fn as_slice(&self) -> &[Pixel] {
        &self.data
    }

    /// Get the pixels in row-major order, mutably.
    pub fn as_slice_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }

    /// Consume the image and return its pixels.
    pub fn into_vec(self) -> Vec<Pixel> {
        self.data
    }
}

/// Index by `[row, col]`. Panics when out of bounds, like slice indexing.
impl ops::Index<[usize; 2]> for Image {
    type Output = Pixel;

    fn index(&self, [row, col]: [usize; 2]) -> &Self::Output {
        assert!(
            row < self.rows() && col < self.cols(),
            "pixel index [{row}, {col}] out of bounds for {}",
            self.size
        );
        &self.data[row * self.cols() + col]
    }
}

impl ops::IndexMut<[usize; 2]> for Image {
    fn index_mut(&mut self, [row, col]: [usize; 2]) -> &mut Self::Output {
        assert!(
            row < self.rows() && col < self.cols(),
            "pixel index [{row}, {col}] out of bounds for {}",
            self.size
        );
        let cols = self.cols();
        &mut self.data[row * cols + col]
    }
}
