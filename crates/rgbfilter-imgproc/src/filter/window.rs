use rgbfilter_image::ImageSize;

/// One in-bounds cell of a 3x3 window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowCell {
    /// Kernel row index in `0..3`.
    pub ky: usize,
    /// Kernel column index in `0..3`.
    pub kx: usize,
    /// Image row of the cell.
    pub row: usize,
    /// Image column of the cell.
    pub col: usize,
}

/// Iterate over the in-bounds cells of the 3x3 window centered on `row`, `col`.
///
/// Cells that fall outside the image are skipped without shifting the others:
/// each yielded cell keeps the `(ky, kx)` of its spatial offset, so a kernel
/// indexed with it stays aligned along borders and corners.
///
/// # Arguments
///
/// * `size` - The size of the image.
/// * `row` - The row of the window center.
/// * `col` - The column of the window center.
///
/// # Example
///
/// ```
/// use rgbfilter_imgproc::filter::neighborhood_3x3;
///
/// let size = [3, 3].into();
///
/// assert_eq!(neighborhood_3x3(size, 0, 0).count(), 4);
/// assert_eq!(neighborhood_3x3(size, 0, 1).count(), 6);
/// assert_eq!(neighborhood_3x3(size, 1, 1).count(), 9);
///
/// // the top-left corner only sees the lower-right part of the kernel
/// let first = neighborhood_3x3(size, 0, 0).next().unwrap();
/// assert_eq!((first.ky, first.kx), (1, 1));
/// ```
pub fn neighborhood_3x3(
    size: ImageSize,
    row: usize,
    col: usize,
) -> impl Iterator<Item = WindowCell> {
    (0..3usize)
        .flat_map(|ky| (0..3usize).map(move |kx| (ky, kx)))
        .filter_map(move |(ky, kx)| {
            let r = (row + ky).checked_sub(1)?;
            let c = (col + kx).checked_sub(1)?;
            (r < size.height && c < size.width).then_some(WindowCell {
                ky,
                kx,
                row: r,
                col: c,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::{neighborhood_3x3, WindowCell};
    use rgbfilter_image::ImageSize;

    #[test]
    fn test_window_counts() {
        let size = ImageSize {
            width: 4,
            height: 3,
        };
        let counts = (0..size.height)
            .map(|r| {
                (0..size.width)
                    .map(|c| neighborhood_3x3(size, r, c).count())
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        assert_eq!(
            counts,
            vec![vec![4, 6, 6, 4], vec![6, 9, 9, 6], vec![4, 6, 6, 4]]
        );
    }

    #[test]
    fn test_window_kernel_alignment() {
        let size = ImageSize {
            width: 3,
            height: 3,
        };

        // bottom-right corner keeps the upper-left kernel cells
        let cells = neighborhood_3x3(size, 2, 2).collect::<Vec<_>>();
        assert_eq!(
            cells,
            vec![
                WindowCell { ky: 0, kx: 0, row: 1, col: 1 },
                WindowCell { ky: 0, kx: 1, row: 1, col: 2 },
                WindowCell { ky: 1, kx: 0, row: 2, col: 1 },
                WindowCell { ky: 1, kx: 1, row: 2, col: 2 },
            ]
        );

        // top edge skips the whole first kernel row
        assert!(neighborhood_3x3(size, 0, 1).all(|cell| cell.ky > 0));
    }

    #[test]
    fn test_window_single_pixel() {
        let size = ImageSize {
            width: 1,
            height: 1,
        };
        let cells = neighborhood_3x3(size, 0, 0).collect::<Vec<_>>();
        assert_eq!(cells, vec![WindowCell { ky: 1, kx: 1, row: 0, col: 0 }]);
    }
}
