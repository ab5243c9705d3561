//! Image containers used by the calibration pipeline.
//!
//! Frames arrive as borrowed interleaved RGB buffers ([`RgbImageU8`]). The
//! pipeline converts them once to a float luma image ([`ImageF32`], values in
//! `[0, 1]`) and works on that from there on.

pub mod f32;
pub mod io;
pub mod rgb;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::rgb::{RgbFrame, RgbImageU8};
pub use self::traits::{ImageView, ImageViewMut};
