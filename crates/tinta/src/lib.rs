#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use tinta_image as image;

#[doc(inline)]
pub use tinta_imgproc as imgproc;
