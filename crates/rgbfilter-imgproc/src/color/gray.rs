use rgbfilter_image::{saturate_u8, Image, Pixel};

/// Convert an image to grayscale in place.
///
/// Every pixel is replaced by the unweighted mean of its three channels,
/// rounded half away from zero:
///
/// Y = round((B + G + R) / 3)
///
/// # Arguments
///
/// * `image` - The image to convert. Its size is left unchanged.
///
/// # Example
///
/// ```
/// use rgbfilter_image::{Image, Pixel};
/// use rgbfilter_imgproc::color::grayscale;
///
/// let mut image = Image::from_size_val([4, 5].into(), Pixel::rgb(255, 0, 0)).unwrap();
///
/// grayscale(&mut image);
/// assert!(image.as_slice().iter().all(|p| *p == Pixel::gray(85)));
/// ```
pub fn grayscale(image: &mut Image) {
    image.as_slice_mut().iter_mut().for_each(|pixel| {
        *pixel = Pixel::gray(mean_intensity(pixel));
    });
}

fn mean_intensity(pixel: &Pixel) -> u8 {
    let sum = pixel.blue as u16 + pixel.green as u16 + pixel.red as u16;
    saturate_u8(sum as f64 / 3.0)
}
