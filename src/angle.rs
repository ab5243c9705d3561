//! Angle utilities and the orientation bands used to split Hough lines into
//! two families.
//!
//! Hough lines carry the angle θ of their *normal*. A normal close to 90°
//! belongs to the "vertical" band and a normal close to 0°/180° to the
//! "horizontal" band; the names follow the normal direction, not the drawn
//! line.
use serde::{Deserialize, Serialize};

/// Normalizes an angle into the range [0, π).
#[inline]
pub fn normalize_half_pi(angle: f32) -> f32 {
    let mut norm = angle.rem_euclid(std::f32::consts::PI);
    if norm >= std::f32::consts::PI {
        norm -= std::f32::consts::PI;
    }
    if norm >= std::f32::consts::PI - 1e-6 {
        0.0
    } else {
        norm
    }
}

/// Family a line falls into after orientation banding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LineFamily {
    Horizontal,
    Vertical,
}

/// Degree bands for [`LineFamily`] classification.
///
/// - vertical: `θ ∈ (90 - vertical_half_width, 90 + vertical_half_width)`
/// - horizontal: `θ ∈ [0, horizontal_margin) ∪ (180 - horizontal_margin, 180]`
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrientationBands {
    pub vertical_half_width_deg: f32,
    pub horizontal_margin_deg: f32,
}

impl Default for OrientationBands {
    fn default() -> Self {
        Self {
            vertical_half_width_deg: 10.0,
            horizontal_margin_deg: 10.0,
        }
    }
}

impl OrientationBands {
    /// Classify a normal angle in radians; `None` for oblique lines.
    pub fn classify(&self, theta: f32) -> Option<LineFamily> {
        let deg = normalize_half_pi(theta).to_degrees();
        if deg > 90.0 - self.vertical_half_width_deg && deg < 90.0 + self.vertical_half_width_deg {
            Some(LineFamily::Vertical)
        } else if deg < self.horizontal_margin_deg || deg > 180.0 - self.horizontal_margin_deg {
            Some(LineFamily::Horizontal)
        } else {
            None
        }
    }
}
