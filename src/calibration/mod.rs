//! One-shot court calibration.
//!
//! Overview
//! - Converts the frame to luma, blurs it with a 5×5 Gaussian and runs Canny.
//! - Extracts Hough lines and splits them into horizontal/vertical families by
//!   the angle of their normal.
//! - Keeps the extremal line of each family on both sides (by ρ) as a proxy
//!   for the outer court boundary, intersects the four lines pairwise and
//!   reduces the intersections to a quadrilateral via convex hull and
//!   Douglas–Peucker.
//! - Orders the quad's corners and solves the perspective transform onto the
//!   canonical court canvas.
//!
//! Any failing step yields [`CalibrationOutcome::NotYet`]; the caller simply
//! tries again on a later frame. Once a [`CourtCalibrator`] succeeds it keeps
//! its [`Calibration`] for good and stops looking at frames.
//!
//! Modules
//! - [`params`] – tunables and the canonical canvas.
//! - `pipeline` – the stateless corner search.
//! - `calibrator` – the stateful once-only wrapper.

mod calibrator;
pub mod params;
mod pipeline;

pub use calibrator::CourtCalibrator;
pub use params::{CalibrationParams, CourtCanvas};
pub use pipeline::{calibrate_frame, calibrate_luma};

use crate::homography::perspective_transform;
use nalgebra::Matrix3;
use serde::Serialize;
use std::fmt;

/// Why a calibration attempt did not produce a [`Calibration`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CalibrationFailure {
    EmptyFrame,
    NoLines,
    MissingHorizontal,
    MissingVertical,
    TooFewIntersections,
    DegenerateHull,
    NotQuadrilateral,
    SingularTransform,
}

impl fmt::Display for CalibrationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::EmptyFrame => "frame has no pixels",
            Self::NoLines => "no lines above the vote threshold",
            Self::MissingHorizontal => "no horizontal lines",
            Self::MissingVertical => "no vertical lines",
            Self::TooFewIntersections => "fewer than four line intersections",
            Self::DegenerateHull => "intersection hull has fewer than four vertices",
            Self::NotQuadrilateral => "hull does not reduce to four corners",
            Self::SingularTransform => "corners do not define a perspective transform",
        };
        f.write_str(msg)
    }
}

/// Image → court-canvas mapping found from four court corners.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Calibration {
    /// Image pixels → canvas units.
    pub hmtx: Matrix3<f32>,
    /// Image corners: top-left, top-right, bottom-right, bottom-left.
    pub corners: [[f32; 2]; 4],
    pub canvas: CourtCanvas,
}

impl Calibration {
    /// Build from ordered image corners. `None` if the corners are degenerate.
    pub fn from_corners(corners: [[f32; 2]; 4], canvas: CourtCanvas) -> Option<Self> {
        let hmtx = perspective_transform(&corners, &canvas.corners())?;
        Some(Self {
            hmtx,
            corners,
            canvas,
        })
    }
}

/// Result of a calibration attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum CalibrationOutcome {
    Calibrated(Calibration),
    NotYet(CalibrationFailure),
}

impl CalibrationOutcome {
    pub fn calibration(&self) -> Option<&Calibration> {
        match self {
            Self::Calibrated(c) => Some(c),
            Self::NotYet(_) => None,
        }
    }

    pub fn is_calibrated(&self) -> bool {
        matches!(self, Self::Calibrated(_))
    }
}
