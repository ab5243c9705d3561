use serde::{Deserialize, Serialize};

/// Ball centre normalized by the frame size; both axes nominally in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageRatioPoint {
    pub x: f32,
    pub y: f32,
}

impl ImageRatioPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Position on the rectified court, normalized to the canonical canvas.
///
/// `(0, 0)` is the top-left court corner and `(1, 1)` the bottom-right one.
/// Values may stray slightly outside `[0, 1]` because of fitting noise. `y`
/// grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CourtPoint {
    pub x: f32,
    pub y: f32,
}

impl CourtPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in court units.
    pub fn distance(&self, other: &CourtPoint) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}
