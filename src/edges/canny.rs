//! Canny edge detector: 3×3 gradients (Sobel with the L1 norm by default),
//! non-maximum suppression and double-threshold hysteresis.
//!
//! Thresholds are given on the 8-bit intensity scale (the usual `50 / 150`
//! pair) even though the pipeline works on `[0, 1]` floats; they are rescaled
//! internally.
use super::grad::{image_gradients, GradientKernel, MagnitudeNorm};
use super::nms::suppress_non_maxima;
use crate::image::ImageF32;
use serde::{Deserialize, Serialize};

const INTENSITY_SCALE: f32 = 255.0;

/// Hysteresis thresholds on the 8-bit gradient scale.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CannyParams {
    /// Weak-edge threshold. Pixels above it survive only when connected to a
    /// strong pixel.
    pub low: f32,
    /// Strong-edge threshold.
    pub high: f32,
    pub kernel: GradientKernel,
    /// Thresholds are tuned for L1; switching to L2 lowers every magnitude.
    pub norm: MagnitudeNorm,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            low: 50.0,
            high: 150.0,
            kernel: GradientKernel::Sobel,
            norm: MagnitudeNorm::L1,
        }
    }
}

/// Binary edge map, row-major, one byte per pixel (0 or 255).
#[derive(Clone, Debug)]
pub struct EdgeMap {
    pub w: usize,
    pub h: usize,
    pub data: Vec<u8>,
}

impl EdgeMap {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    #[inline]
    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x] != 0
    }

    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Edge pixel coordinates in raster order.
    pub fn points(&self) -> Vec<(usize, usize)> {
        let mut pts = Vec::with_capacity(self.count());
        for y in 0..self.h {
            for x in 0..self.w {
                if self.is_edge(x, y) {
                    pts.push((x, y));
                }
            }
        }
        pts
    }

    /// Float rendition for debug dumps (edges = 1.0).
    pub fn to_image_f32(&self) -> ImageF32 {
        let mut out = ImageF32::new(self.w, self.h);
        for (dst, &v) in out.data.iter_mut().zip(&self.data) {
            *dst = if v != 0 { 1.0 } else { 0.0 };
        }
        out
    }
}

/// Run Canny on a `[0, 1]` luma image.
pub fn canny(l: &ImageF32, params: &CannyParams) -> EdgeMap {
    let (w, h) = (l.w, l.h);
    let mut edges = EdgeMap::new(w, h);
    if w < 3 || h < 3 {
        return edges;
    }
    let (low, high) = if params.low <= params.high {
        (params.low, params.high)
    } else {
        (params.high, params.low)
    };
    let low = low / INTENSITY_SCALE;
    let high = high / INTENSITY_SCALE;

    let grad = image_gradients(l, params.kernel, params.norm);
    let thin = suppress_non_maxima(&grad, low);

    let mut stack: Vec<usize> = Vec::new();
    for (i, &m) in thin.iter().enumerate() {
        if m > high {
            edges.data[i] = 255;
            stack.push(i);
        }
    }

    // Grow strong pixels into 8-connected weak neighbours.
    while let Some(i) = stack.pop() {
        let x = i % w;
        let y = i / w;
        for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                let j = ny * w + nx;
                if edges.data[j] == 0 && thin[j] > low {
                    edges.data[j] = 255;
                    stack.push(j);
                }
            }
        }
    }

    edges
}
