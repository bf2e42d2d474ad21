#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image filtering module.
pub mod filter;

/// image flipping module.
pub mod flip;

/// named filters and filter chains.
pub mod pipeline;
