use rgbfilter_image::Image;

/// Mirror the image left to right, in place.
///
/// Each row swaps column `j` with column `width - 1 - j` for the first half of
/// the row; the center column of an odd width stays put. Reflecting twice
/// restores the original image.
///
/// # Arguments
///
/// * `image` - The image to reflect with shape (H, W).
///
/// # Example
///
/// ```
/// use rgbfilter_image::{Image, Pixel};
/// use rgbfilter_imgproc::flip::reflect;
///
/// let mut image = Image::from_rows(vec![vec![Pixel::gray(1), Pixel::gray(2)]]).unwrap();
///
/// reflect(&mut image);
/// assert_eq!(image.as_slice(), &[Pixel::gray(2), Pixel::gray(1)]);
/// ```
pub fn reflect(image: &mut Image) {
    let cols = image.cols();
    image.rows_iter_mut().for_each(|row| {
        for j in 0..cols / 2 {
            row.swap(j, cols - 1 - j);
        }
    });
}
