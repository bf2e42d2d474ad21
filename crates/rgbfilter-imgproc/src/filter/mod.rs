//! Filter operations
//!
//! This module provides the 3x3 neighborhood filters: box blur and Sobel edge detection.

/// Filter kernels
pub mod kernels;

/// 3x3 window iteration
mod window;
pub use window::*;

/// Filter operations
mod ops;
pub use ops::*;
