//! Non-maximum suppression on gradient magnitude with direction alignment.
//!
//! For each pixel the gradient direction is quantized to one of four bins
//! (0°, 45°, 90°, 135°). The pixel survives if its magnitude is at least the
//! low threshold, strictly greater than the neighbour on the upper/left side
//! and not smaller than the neighbour on the lower/right side along that
//! direction. The asymmetric comparison keeps exactly one pixel across
//! flat-topped ridges.
use crate::edges::grad::Grad;
use crate::image::ImageView;

const TAN_22_5_DEG: f32 = 0.414_213_57;

/// Returns a `w * h` magnitude buffer where suppressed pixels are zero.
pub fn suppress_non_maxima(grad: &Grad, mag_thresh: f32) -> Vec<f32> {
    let w = grad.gx.w;
    let h = grad.gx.h;
    let mut out = vec![0.0f32; w * h];
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag < mag_thresh || mag <= 0.0 {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            // (upper/left, lower/right) neighbours along the gradient direction
            let (before, after) = if abs_gy <= abs_gx * TAN_22_5_DEG {
                (mag_row[x - 1], mag_row[x + 1])
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x - 1], mag_next[x + 1])
            } else {
                (mag_prev[x + 1], mag_next[x - 1])
            };

            if mag > before && mag >= after {
                out[y * w + x] = mag;
            }
        }
    }

    out
}
