/// A fixed 3x3 kernel of integer weights, indexed `[ky][kx]`.
pub type Kernel3 = [[i32; 3]; 3];

/// Box blur kernel: every cell of the window weighs the same.
pub const BOX_3X3: Kernel3 = [[1, 1, 1], [1, 1, 1], [1, 1, 1]];

/// Sobel kernel for the horizontal gradient.
pub const SOBEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Sobel kernel for the vertical gradient.
pub const SOBEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];
