/// A single 8-bit pixel stored in blue, green, red order.
///
/// The field order follows the packed triples of bitmap containers, so a
/// `[u8; 3]` obtained from [`Pixel::to_bgr`] can be written back verbatim.
///
/// # Examples
///
/// ```
/// use rgbfilter_image::Pixel;
///
/// let red = Pixel::rgb(255, 0, 0);
///
/// assert_eq!(red.red, 255);
/// assert_eq!(red.to_bgr(), [0, 0, 255]);
/// assert_eq!(Pixel::from_bgr([0, 0, 255]), red);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Blue channel.
    pub blue: u8,
    /// Green channel.
    pub green: u8,
    /// Red channel.
    pub red: u8,
}

impl Pixel {
    /// Create a pixel from its channels in storage order.
    pub const fn bgr(blue: u8, green: u8, red: u8) -> Self {
        Self { blue, green, red }
    }

    /// Create a pixel from its channels in red, green, blue order.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { blue, green, red }
    }

    /// Create a pixel with the same value in all three channels.
    pub const fn gray(value: u8) -> Self {
        Self::bgr(value, value, value)
    }

    /// Build a pixel from a `[blue, green, red]` triple.
    pub const fn from_bgr(bgr: [u8; 3]) -> Self {
        Self::bgr(bgr[0], bgr[1], bgr[2])
    }

    /// Get the channels as a `[blue, green, red]` triple.
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }

    /// Whether all three channels hold the same value.
    pub fn is_gray(&self) -> bool {
        self.blue == self.green && self.green == self.red
    }
}

impl From<[u8; 3]> for Pixel {
    fn from(bgr: [u8; 3]) -> Self {
        Self::from_bgr(bgr)
    }
}

impl From<Pixel> for [u8; 3] {
    fn from(pixel: Pixel) -> Self {
        pixel.to_bgr()
    }
}

/// Convert a computed channel value back to 8 bits.
///
/// Rounds half away from zero, then clamps to `[0, 255]`. Every filter in the
/// engine goes through this function so the rounding rule is shared.
///
/// # Examples
///
/// ```
/// use rgbfilter_image::saturate_u8;
///
/// assert_eq!(saturate_u8(0.5), 1);
/// assert_eq!(saturate_u8(2.0 / 3.0), 1);
/// assert_eq!(saturate_u8(1020.0), 255);
/// assert_eq!(saturate_u8(-3.0), 0);
/// ```
pub fn saturate_u8(x: f64) -> u8 {
    x.round().clamp(0.0, 255.0) as u8
}
