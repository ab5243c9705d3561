use super::params::CalibrationParams;
use super::pipeline::calibrate_frame;
use super::{Calibration, CalibrationOutcome};
use crate::diagnostics::CalibrationReport;
use crate::image::RgbImageU8;
use log::info;

/// Finds the court once and then holds on to it.
///
/// Every call to [`CourtCalibrator::try_calibrate`] before the first success
/// runs a fresh, independent attempt. After success the stored
/// [`Calibration`] is returned as-is and frames are no longer inspected.
pub struct CourtCalibrator {
    params: CalibrationParams,
    calibration: Option<Calibration>,
    attempts: u64,
    last_report: Option<CalibrationReport>,
}

impl CourtCalibrator {
    pub fn new(params: CalibrationParams) -> Self {
        Self {
            params,
            calibration: None,
            attempts: 0,
            last_report: None,
        }
    }

    /// Start from a known calibration (e.g. one restored by the caller or
    /// entered manually); no frames will be inspected.
    pub fn with_calibration(params: CalibrationParams, calibration: Calibration) -> Self {
        Self {
            params,
            calibration: Some(calibration),
            attempts: 0,
            last_report: None,
        }
    }

    pub fn try_calibrate(&mut self, frame: RgbImageU8<'_>) -> CalibrationOutcome {
        if let Some(calibration) = &self.calibration {
            return CalibrationOutcome::Calibrated(calibration.clone());
        }

        self.attempts += 1;
        let (outcome, report) = calibrate_frame(frame, &self.params);
        if let CalibrationOutcome::Calibrated(calibration) = &outcome {
            info!(
                "court calibrated after {} attempt(s): corners {:?}",
                self.attempts, calibration.corners
            );
            self.calibration = Some(calibration.clone());
        }
        self.last_report = Some(report);
        outcome
    }

    pub fn calibration(&self) -> Option<&Calibration> {
        self.calibration.as_ref()
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibration.is_some()
    }

    /// Number of frames actually inspected.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Diagnostics of the most recent inspected frame.
    pub fn last_report(&self) -> Option<&CalibrationReport> {
        self.last_report.as_ref()
    }

    pub fn params(&self) -> &CalibrationParams {
        &self.params
    }
}

impl Default for CourtCalibrator {
    fn default() -> Self {
        Self::new(CalibrationParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::{CalibrationFailure, CourtCanvas};
    use crate::image::RgbFrame;

    #[test]
    fn blank_frames_keep_retrying() {
        let frame = RgbFrame::filled(80, 60, [20, 90, 40]);
        let mut calibrator = CourtCalibrator::default();
        for _ in 0..3 {
            let outcome = calibrator.try_calibrate(frame.as_view());
            assert_eq!(outcome, CalibrationOutcome::NotYet(CalibrationFailure::NoLines));
        }
        assert_eq!(calibrator.attempts(), 3);
        assert!(!calibrator.is_calibrated());
        assert!(calibrator.last_report().is_some());
    }

    #[test]
    fn preset_calibration_is_never_recomputed() {
        let corners = [[10.0, 10.0], [70.0, 10.0], [75.0, 55.0], [5.0, 55.0]];
        let calibration = Calibration::from_corners(corners, CourtCanvas::default()).unwrap();
        let mut calibrator =
            CourtCalibrator::with_calibration(CalibrationParams::default(), calibration.clone());
        let frame = RgbFrame::filled(80, 60, [0, 0, 0]);
        let outcome = calibrator.try_calibrate(frame.as_view());
        assert_eq!(outcome, CalibrationOutcome::Calibrated(calibration));
        assert_eq!(calibrator.attempts(), 0);
        assert!(calibrator.last_report().is_none());
    }
}
