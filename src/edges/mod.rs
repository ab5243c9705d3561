//! Edge processing: image gradients, non-maximum suppression and a Canny
//! detector built from the two.
//!
//! - Gradient computation (Sobel/Scharr) returning `gx`, `gy` and magnitude
//!   under an L1 or L2 norm.
//! - Non-maximum suppression on the gradient magnitude with a
//!   direction-aligned neighbourhood.
//! - Double-threshold hysteresis producing a binary [`EdgeMap`] for the Hough
//!   stage.
//!
//! Borders are handled by clamping indices (replicate) in the gradient pass and
//! by ignoring the outermost 1-pixel frame in NMS.

pub mod canny;
pub mod grad;
pub mod nms;

pub use canny::{canny, CannyParams, EdgeMap};
pub use grad::{image_gradients, Grad, GradientKernel, MagnitudeNorm};
pub use nms::suppress_non_maxima;
