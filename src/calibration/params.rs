//! Calibration tunables. Defaults:
//! Canny 50/150, 1 px / 1° Hough grid with 150 votes, ±10° orientation bands,
//! hull simplification at 10 % of the perimeter and a 1000×2000 canvas.
use crate::angle::OrientationBands;
use crate::edges::CannyParams;
use crate::hough::HoughParams;
use serde::{Deserialize, Serialize};

/// Canonical rectified court rectangle, in canvas units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtCanvas {
    pub width: f32,
    pub height: f32,
}

impl Default for CourtCanvas {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 2000.0,
        }
    }
}

impl CourtCanvas {
    /// Canvas corners in calibration order (TL, TR, BR, BL).
    pub fn corners(&self) -> [[f32; 2]; 4] {
        [
            [0.0, 0.0],
            [self.width, 0.0],
            [self.width, self.height],
            [0.0, self.height],
        ]
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalibrationParams {
    /// Apply the 5×5 Gaussian before edge detection.
    pub blur: bool,
    pub canny: CannyParams,
    pub hough: HoughParams,
    pub bands: OrientationBands,
    /// Douglas–Peucker tolerance as a fraction of the hull perimeter.
    pub approx_epsilon_frac: f32,
    pub canvas: CourtCanvas,
}

impl Default for CalibrationParams {
    fn default() -> Self {
        Self {
            blur: true,
            canny: CannyParams::default(),
            hough: HoughParams::default(),
            bands: OrientationBands::default(),
            approx_epsilon_frac: 0.1,
            canvas: CourtCanvas::default(),
        }
    }
}
