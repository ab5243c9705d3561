//! Interleaved 8-bit RGB frames.
//!
//! [`RgbImageU8`] is the borrowed view the analyzer consumes every frame;
//! [`RgbFrame`] is the owned counterpart used by tooling, the worker thread
//! and debug annotation.
use super::traits::{ImageView, ImageViewMut};
use super::ImageF32;

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Borrowed interleaved RGB view; `stride` counts bytes between rows.
#[derive(Clone, Copy, Debug)]
pub struct RgbImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> RgbImageU8<'a> {
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + 3 * x;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Convert to a luma image in `[0, 1]` with BT.601 weights.
    pub fn to_gray_f32(&self) -> ImageF32 {
        let mut out = ImageF32::new(self.w, self.h);
        for y in 0..self.h {
            let src = self.row(y);
            for (dst, px) in out.row_mut(y).iter_mut().zip(src.chunks_exact(3)) {
                let luma = LUMA_R * px[0] as f32 + LUMA_G * px[1] as f32 + LUMA_B * px[2] as f32;
                *dst = luma / 255.0;
            }
        }
        out
    }

    /// Copy into an owned, tightly packed frame.
    pub fn to_owned_frame(&self) -> RgbFrame {
        let mut data = Vec::with_capacity(self.w * self.h * 3);
        for y in 0..self.h {
            data.extend_from_slice(self.row(y));
        }
        RgbFrame {
            width: self.w,
            height: self.h,
            data,
        }
    }
}

impl<'a> ImageView for RgbImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn channels(&self) -> usize {
        3
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + 3 * self.w]
    }
}

/// Owned, tightly packed RGB frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbFrame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbFrame {
    /// Wrap raw interleaved bytes. Returns `None` when the length does not
    /// match `width * height * 3`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        (data.len() == width * height * 3).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Frame filled with a single colour.
    pub fn filled(width: usize, height: usize, color: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            data.extend_from_slice(&color);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Borrow as a read-only [`RgbImageU8`] view.
    pub fn as_view(&self) -> RgbImageU8<'_> {
        RgbImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width * 3,
            data: &self.data,
        }
    }

    /// Write one pixel; out-of-bounds coordinates are ignored.
    #[inline]
    pub fn put_pixel(&mut self, x: i64, y: i64, color: [u8; 3]) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let i = (y as usize * self.width + x as usize) * 3;
        self.data[i..i + 3].copy_from_slice(&color);
    }
}

impl ImageView for RgbFrame {
    type Pixel = u8;

    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn stride(&self) -> usize {
        self.width * 3
    }
    fn channels(&self) -> usize {
        3
    }
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width * 3;
        &self.data[start..start + self.width * 3]
    }
}

impl ImageViewMut for RgbFrame {
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width * 3;
        let end = start + self.width * 3;
        &mut self.data[start..end]
    }
}
