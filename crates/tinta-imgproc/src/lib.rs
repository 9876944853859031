#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image filtering module.
pub mod filter;

/// selection of a single filter by name.
pub mod filters;

/// image flipping module.
pub mod flip;
