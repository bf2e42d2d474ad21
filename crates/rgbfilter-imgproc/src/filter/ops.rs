use rgbfilter_image::{saturate_u8, Image, ImageError, Pixel};

use super::kernels::{BOX_3X3, SOBEL_X, SOBEL_Y};
use super::neighborhood_3x3;

fn check_same_size(src: &Image, dst: &Image) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }
    Ok(())
}

/// Write `f(row, col)` into every pixel of `dst`.
fn fill_by_position(dst: &mut Image, f: impl Fn(usize, usize) -> Pixel) {
    let cols = dst.cols();
    for (idx, out) in dst.as_slice_mut().iter_mut().enumerate() {
        *out = f(idx / cols, idx % cols);
    }
}

fn box_blur_impl(src: &Image, dst: &mut Image) {
    let size = src.size();
    fill_by_position(dst, |row, col| {
        let mut sum = [0u32; 3];
        let mut weight = 0u32;
        for cell in neighborhood_3x3(size, row, col) {
            let w = BOX_3X3[cell.ky][cell.kx] as u32;
            let bgr = src[[cell.row, cell.col]].to_bgr();
            for (acc, v) in sum.iter_mut().zip(bgr) {
                *acc += w * v as u32;
            }
            weight += w;
        }
        // the center cell is always in bounds, so weight > 0
        Pixel::from_bgr(sum.map(|s| saturate_u8(s as f64 / weight as f64)))
    });
}

fn sobel_impl(src: &Image, dst: &mut Image) {
    let size = src.size();
    fill_by_position(dst, |row, col| {
        let mut gx = [0i32; 3];
        let mut gy = [0i32; 3];
        for cell in neighborhood_3x3(size, row, col) {
            let wx = SOBEL_X[cell.ky][cell.kx];
            let wy = SOBEL_Y[cell.ky][cell.kx];
            let bgr = src[[cell.row, cell.col]].to_bgr();
            for ch in 0..3 {
                gx[ch] += wx * bgr[ch] as i32;
                gy[ch] += wy * bgr[ch] as i32;
            }
        }
        Pixel::from_bgr(std::array::from_fn(|ch| {
            let magnitude = ((gx[ch] * gx[ch] + gy[ch] * gy[ch]) as f64).sqrt();
            saturate_u8(magnitude)
        }))
    });
}

/// Blur an image with a 3x3 box filter.
///
/// Every output pixel is the per-channel mean of the in-bounds cells of the
/// 3x3 window around it in `src`. Cells outside the image are left out of both
/// the sum and the divisor, so corners average 4 pixels, edges 6 and the
/// interior 9. Means are rounded half away from zero.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if `src` and `dst` differ in size.
///
/// # Example
///
/// ```
/// use rgbfilter_image::{Image, Pixel};
/// use rgbfilter_imgproc::filter::box_blur;
///
/// let src = Image::from_size_val([3, 3].into(), Pixel::rgb(10, 20, 30)).unwrap();
/// let mut dst = Image::from_size_val(src.size(), Pixel::default()).unwrap();
///
/// box_blur(&src, &mut dst).unwrap();
/// assert_eq!(dst, src);
/// ```
pub fn box_blur(src: &Image, dst: &mut Image) -> Result<(), ImageError> {
    check_same_size(src, dst)?;
    box_blur_impl(src, dst);
    Ok(())
}

/// Blur an image in place with a 3x3 box filter.
///
/// The image is snapshotted first and every window is read from the snapshot,
/// so already blurred pixels never feed into their neighbors. See [`box_blur`].
/// Empty images are left untouched.
pub fn blur(image: &mut Image) {
    if image.is_empty() {
        log::trace!("blur: nothing to do for {}", image.size());
        return;
    }
    let snapshot = image.clone();
    box_blur_impl(&snapshot, image);
}

/// Compute the Sobel gradient magnitude of an image, per channel.
///
/// For each channel the horizontal and vertical responses of the
/// [`SOBEL_X`](super::kernels::SOBEL_X) and [`SOBEL_Y`](super::kernels::SOBEL_Y)
/// kernels are accumulated over the in-bounds cells of the 3x3 window in `src`.
/// Cells outside the image contribute nothing and do not shift the kernel.
/// The output is `sqrt(gx^2 + gy^2)` rounded half away from zero and clamped to
/// `[0, 255]`.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if `src` and `dst` differ in size.
pub fn sobel(src: &Image, dst: &mut Image) -> Result<(), ImageError> {
    check_same_size(src, dst)?;
    sobel_impl(src, dst);
    Ok(())
}

/// Detect edges in place with the Sobel operator.
///
/// The image is snapshotted first and every window is read from the snapshot.
/// See [`sobel`]. Empty images are left untouched.
pub fn edges(image: &mut Image) {
    if image.is_empty() {
        log::trace!("edges: nothing to do for {}", image.size());
        return;
    }
    let snapshot = image.clone();
    sobel_impl(&snapshot, image);
}

#[cfg(test)]
mod tests {
    use rgbfilter_image::{Image, ImageError, ImageSize, Pixel};

    /// 3x3 patch where every channel holds 10, 20, .., 90 in row-major order.
    fn ramp_3x3() -> Result<Image, ImageError> {
        let data = (1..=9u8).map(|v| Pixel::gray(v * 10)).collect();
        Image::new([3, 3].into(), data)
    }

    fn red_channel(image: &Image) -> Vec<u8> {
        image.as_slice().iter().map(|p| p.red).collect()
    }

    #[test]
    fn test_box_blur_divisors() -> Result<(), ImageError> {
        let mut image = ramp_3x3()?;
        super::blur(&mut image);

        // corners divide by 4, edges by 6, the center by 9
        assert_eq!(
            red_channel(&image),
            vec![30, 35, 40, 45, 50, 55, 60, 65, 70]
        );
        assert!(image.as_slice().iter().all(Pixel::is_gray));
        Ok(())
    }

    #[test]
    fn test_box_blur_uniform_fixed_point() -> Result<(), ImageError> {
        let src = Image::from_size_val([5, 4].into(), Pixel::rgb(10, 20, 30))?;
        let mut image = src.clone();
        super::blur(&mut image);
        assert_eq!(image, src);
        Ok(())
    }

    #[test]
    fn test_box_blur_rounds_half_up() -> Result<(), ImageError> {
        // every pixel of a 2x2 image is a corner: (1 + 1 + 0 + 0) / 4 = 0.5
        let data = vec![
            Pixel::rgb(1, 0, 0),
            Pixel::rgb(1, 0, 0),
            Pixel::rgb(0, 0, 0),
            Pixel::rgb(0, 0, 0),
        ];
        let mut image = Image::new([2, 2].into(), data)?;
        super::blur(&mut image);
        assert!(image.as_slice().iter().all(|p| *p == Pixel::rgb(1, 0, 0)));
        Ok(())
    }

    #[test]
    fn test_box_blur_channels_independent() -> Result<(), ImageError> {
        let data = vec![Pixel::rgb(255, 0, 0), Pixel::rgb(0, 0, 255)];
        let mut image = Image::new([2, 1].into(), data)?;
        super::blur(&mut image);
        // (255 + 0) / 2 = 127.5 rounds up in both channels
        assert_eq!(image.as_slice(), &[Pixel::rgb(128, 0, 128); 2]);
        Ok(())
    }

    #[test]
    fn test_box_blur_reads_snapshot() -> Result<(), ImageError> {
        // a single bright pixel at the start of a row
        let data = vec![
            Pixel::gray(90),
            Pixel::gray(0),
            Pixel::gray(0),
            Pixel::gray(0),
        ];
        let mut image = Image::new([4, 1].into(), data)?;
        super::blur(&mut image);

        // a running in-place blur would feed 45 into the second pixel
        assert_eq!(red_channel(&image), vec![45, 30, 0, 0]);
        Ok(())
    }

    #[test]
    fn test_box_blur_size_mismatch() -> Result<(), ImageError> {
        let src = Image::from_size_val([3, 3].into(), Pixel::default())?;
        let mut dst = Image::from_size_val([3, 2].into(), Pixel::default())?;
        assert_eq!(
            super::box_blur(&src, &mut dst),
            Err(ImageError::InvalidImageSize(3, 3, 3, 2))
        );
        Ok(())
    }

    #[test]
    fn test_sobel_ramp() -> Result<(), ImageError> {
        let src = ramp_3x3()?;
        let mut dst = Image::from_size_val(src.size(), Pixel::default())?;
        super::sobel(&src, &mut dst)?;

        // center: gx = 80, gy = 240, |g| = 252.98
        assert_eq!(dst[[1, 1]], Pixel::gray(253));
        // top-left corner: gx = 90, gy = 130, |g| = 158.11
        assert_eq!(dst[[0, 0]], Pixel::gray(158));
        Ok(())
    }

    #[test]
    fn test_sobel_uniform_interior_is_zero() -> Result<(), ImageError> {
        let mut image = Image::from_size_val([5, 5].into(), Pixel::rgb(10, 20, 30))?;
        super::edges(&mut image);

        for row in 1..4 {
            for col in 1..4 {
                assert_eq!(image[[row, col]], Pixel::default());
            }
        }
        Ok(())
    }

    #[test]
    fn test_sobel_border_kernel_alignment() -> Result<(), ImageError> {
        // out-of-bounds cells add nothing, so borders of a flat image respond
        let mut image = Image::from_size_val([3, 3].into(), Pixel::gray(10))?;
        super::edges(&mut image);

        // corners: gx = gy = 3 * 10, |g| = 42.43
        for [row, col] in [[0, 0], [0, 2], [2, 0], [2, 2]] {
            assert_eq!(image[[row, col]], Pixel::gray(42));
        }
        // edges: one gradient is 4 * 10, the other cancels
        for [row, col] in [[0, 1], [1, 0], [1, 2], [2, 1]] {
            assert_eq!(image[[row, col]], Pixel::gray(40));
        }
        assert_eq!(image[[1, 1]], Pixel::gray(0));
        Ok(())
    }

    #[test]
    fn test_sobel_clamps_magnitude() -> Result<(), ImageError> {
        let b = Pixel::gray(0);
        let w = Pixel::gray(255);

        // vertical step: center gx = 4 * 255 = 1020
        let mut step = Image::from_rows(vec![vec![b, b, w], vec![b, b, w], vec![b, b, w]])?;
        super::edges(&mut step);
        assert_eq!(step[[1, 1]], Pixel::gray(255));

        // checkerboard corner: gx = gy = 255, |g| = 360.6
        let mut checker =
            Image::from_rows(vec![vec![w, b, w], vec![b, w, b], vec![w, b, w]])?;
        super::edges(&mut checker);
        assert_eq!(checker[[0, 0]], Pixel::gray(255));
        Ok(())
    }

    #[test]
    fn test_sobel_channels_independent() -> Result<(), ImageError> {
        let src = Image::new(
            [2, 1].into(),
            vec![Pixel::rgb(0, 0, 0), Pixel::rgb(0, 100, 0)],
        )?;
        let mut dst = src.clone();
        super::sobel(&src, &mut dst)?;

        // left: gx = 2 * 100; right: gx = -2 * 0 + 0 * 100 = 0
        assert_eq!(dst.as_slice(), &[Pixel::rgb(0, 200, 0), Pixel::rgb(0, 0, 0)]);
        Ok(())
    }

    #[test]
    fn test_filters_empty_image() -> Result<(), ImageError> {
        for size in [ImageSize::from([0, 0]), [0, 3].into(), [4, 0].into()] {
            let mut image = Image::new(size, vec![])?;
            super::blur(&mut image);
            super::edges(&mut image);
            assert_eq!(image.size(), size);
            assert!(image.is_empty());
        }
        Ok(())
    }
}
