//! Per-session frame analysis: calibrate once, then map and track every frame.
//!
//! The analyzer owns one [`CourtCalibrator`], one [`CoordinateMapper`] and one
//! [`TrajectoryTracker`]. Every call to [`CourtAnalyzer::analyze_frame`]
//!
//! 1. attempts calibration while the session is still uncalibrated, installing
//!    the first success into the mapper;
//! 2. converts the detection box into an image-ratio point;
//! 3. maps that point onto the court (absent until calibrated);
//! 4. feeds both points to the tracker for speed, label and bounce detection.
use crate::annotate;
use crate::calibration::{
    Calibration, CalibrationOutcome, CalibrationParams, CourtCalibrator,
};
use crate::detection::{BallDetector, BoundingBox};
use crate::image::{RgbFrame, RgbImageU8};
use crate::mapper::CoordinateMapper;
use crate::tracker::{
    BounceEvent, BounceJudge, TrackerParams, TrajectoryKind, TrajectoryTracker,
};
use crate::types::{CourtPoint, ImageRatioPoint};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Court variant being played. Carried through the session for judges and
/// reports; calibration and mapping treat both the same.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CourtType {
    #[default]
    Singles,
    Doubles,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzerParams {
    pub calibration: CalibrationParams,
    pub tracker: TrackerParams,
    pub court_type: CourtType,
    /// Fallback frame rate when the caller passes a non-positive one.
    pub default_fps: f32,
    /// Draw corner and ball markers on annotated frames.
    pub annotate: bool,
}

impl Default for AnalyzerParams {
    fn default() -> Self {
        Self {
            calibration: CalibrationParams::default(),
            tracker: TrackerParams::default(),
            court_type: CourtType::default(),
            default_fps: 30.0,
            annotate: false,
        }
    }
}

/// Everything the analyzer learned from one frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameAnalysis {
    pub frame_index: u64,
    pub calibrated: bool,
    pub ball_position: Option<ImageRatioPoint>,
    pub court_position: Option<CourtPoint>,
    pub speed: f32,
    pub trajectory: TrajectoryKind,
    /// Bounce confirmed by this frame, if any.
    pub new_bounce: Option<BounceEvent>,
    /// Immutable view of the session's bounces up to and including this frame.
    pub bounce_history: Arc<[BounceEvent]>,
}

pub struct CourtAnalyzer {
    params: AnalyzerParams,
    calibrator: CourtCalibrator,
    mapper: CoordinateMapper,
    tracker: TrajectoryTracker,
}

impl CourtAnalyzer {
    pub fn new(params: AnalyzerParams) -> Self {
        Self {
            calibrator: CourtCalibrator::new(params.calibration.clone()),
            mapper: CoordinateMapper::new(),
            tracker: TrajectoryTracker::new(params.tracker.clone()),
            params,
        }
    }

    /// Start a session with a calibration carried over from elsewhere.
    pub fn with_calibration(params: AnalyzerParams, calibration: Calibration) -> Self {
        let mut analyzer = Self::new(params);
        analyzer.mapper.install(&calibration);
        analyzer.calibrator =
            CourtCalibrator::with_calibration(analyzer.params.calibration.clone(), calibration);
        analyzer
    }

    /// Replace the bounce judge. Existing history is discarded.
    pub fn with_judge(mut self, judge: Box<dyn BounceJudge>) -> Self {
        self.tracker = TrajectoryTracker::with_judge(self.params.tracker.clone(), judge);
        self
    }

    pub fn analyze_frame(
        &mut self,
        frame: RgbImageU8<'_>,
        detection: Option<BoundingBox>,
        fps: f32,
    ) -> FrameAnalysis {
        if !self.mapper.is_calibrated() {
            if let CalibrationOutcome::Calibrated(calibration) = self.calibrator.try_calibrate(frame)
            {
                self.mapper.install(&calibration);
            }
        }

        let ball_position = detection.and_then(|b| b.to_image_ratio(frame.w, frame.h));
        let court_position =
            ball_position.and_then(|p| self.mapper.to_court(p, frame.w, frame.h));

        let fps = if fps.is_finite() && fps > 0.0 {
            fps
        } else {
            self.params.default_fps
        };
        let frame_index = self.tracker.frames();
        let out = self.tracker.observe(ball_position, court_position, fps);
        debug!(
            "frame {}: ball={:?} court={:?} speed={:.3}",
            frame_index, ball_position, court_position, out.speed
        );

        FrameAnalysis {
            frame_index,
            calibrated: self.mapper.is_calibrated(),
            ball_position,
            court_position,
            speed: out.speed,
            trajectory: out.trajectory,
            new_bounce: out.bounce,
            bounce_history: self.tracker.history().snapshot(),
        }
    }

    /// Run `detector` on the frame and analyze its first box.
    pub fn analyze_with(
        &mut self,
        detector: &mut dyn BallDetector,
        frame: RgbImageU8<'_>,
        fps: f32,
    ) -> FrameAnalysis {
        let detection = detector.detect(frame).into_iter().next();
        self.analyze_frame(frame, detection, fps)
    }

    /// Draw debug markers for `analysis` onto `frame`. No-op unless
    /// [`AnalyzerParams::annotate`] is set.
    pub fn annotate(&self, frame: &mut RgbFrame, analysis: &FrameAnalysis) {
        if !self.params.annotate {
            return;
        }
        if let Some(calibration) = self.mapper.calibration() {
            annotate::draw_court_corners(frame, calibration);
        }
        if let Some(ball) = analysis.ball_position {
            annotate::draw_ball(frame, ball);
        }
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    pub fn calibration(&self) -> Option<&Calibration> {
        self.mapper.calibration()
    }

    pub fn calibrator(&self) -> &CourtCalibrator {
        &self.calibrator
    }

    pub fn tracker(&self) -> &TrajectoryTracker {
        &self.tracker
    }
}

impl Default for CourtAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerParams::default())
    }
}
