//! Serializable diagnostics for calibration attempts.
//!
//! Every attempt, successful or not, produces a [`CalibrationReport`] with the
//! intermediate counts and per-stage timings. The calibrator keeps the most
//! recent one; the `court_calibrate` tool writes it to JSON.
use crate::calibration::CalibrationFailure;
use serde::Serialize;

/// Timing entry describing a single stage of the calibration pipeline.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one attempt.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// What one calibration attempt saw.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationReport {
    pub width: usize,
    pub height: usize,
    pub edge_pixels: usize,
    pub lines: usize,
    pub horizontal_lines: usize,
    pub vertical_lines: usize,
    pub intersections: Vec<[f32; 2]>,
    pub hull: Vec<[f32; 2]>,
    /// Ordered top-left, top-right, bottom-right, bottom-left when found.
    pub corners: Option<[[f32; 2]; 4]>,
    pub failure: Option<CalibrationFailure>,
    pub timings: TimingBreakdown,
}

impl CalibrationReport {
    pub fn succeeded(&self) -> bool {
        self.failure.is_none() && self.corners.is_some()
    }
}
