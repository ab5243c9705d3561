//! Debug markers drawn onto an owned copy of a frame.
use crate::calibration::Calibration;
use crate::image::RgbFrame;
use crate::types::ImageRatioPoint;

pub const CORNER_COLOR: [u8; 3] = [255, 0, 0];
pub const BALL_COLOR: [u8; 3] = [0, 255, 0];
pub const CORNER_RADIUS: i64 = 10;
pub const BALL_RADIUS: i64 = 5;

pub fn draw_filled_circle(frame: &mut RgbFrame, center: [f32; 2], radius: i64, color: [u8; 3]) {
    if !center[0].is_finite() || !center[1].is_finite() {
        return;
    }
    let cx = center[0].round() as i64;
    let cy = center[1].round() as i64;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                frame.put_pixel(cx + dx, cy + dy, color);
            }
        }
    }
}

pub fn draw_court_corners(frame: &mut RgbFrame, calibration: &Calibration) {
    for corner in calibration.corners {
        draw_filled_circle(frame, corner, CORNER_RADIUS, CORNER_COLOR);
    }
}

pub fn draw_ball(frame: &mut RgbFrame, ball: ImageRatioPoint) {
    let center = [
        ball.x * frame.width() as f32,
        ball.y * frame.height() as f32,
    ];
    draw_filled_circle(frame, center, BALL_RADIUS, BALL_COLOR);
}
