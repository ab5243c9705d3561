#![doc = include_str!("../README.md")]

// Session surface
pub mod analyzer;
pub mod calibration;
pub mod config;
pub mod detection;
pub mod mapper;
pub mod tracker;
pub mod types;
pub mod worker;

// Building blocks of the calibration pipeline. Public for tools and tests;
// expect these to move around.
pub mod angle;
pub mod annotate;
pub mod diagnostics;
pub mod edges;
pub mod filters;
pub mod geometry;
pub mod homography;
pub mod hough;
pub mod image;

// --- High-level re-exports -------------------------------------------------

pub use crate::analyzer::{AnalyzerParams, CourtAnalyzer, CourtType, FrameAnalysis};
pub use crate::calibration::{
    Calibration, CalibrationFailure, CalibrationOutcome, CalibrationParams, CourtCalibrator,
};
pub use crate::detection::{BallDetector, BoundingBox};
pub use crate::mapper::CoordinateMapper;
pub use crate::tracker::{
    BounceCall, BounceEvent, BounceHistory, BounceJudge, TrackerParams, TrajectoryKind,
    TrajectoryTracker,
};
pub use crate::types::{CourtPoint, ImageRatioPoint};
pub use crate::worker::{AnalysisWorker, FrameJob, WorkerOutput};

pub use crate::diagnostics::CalibrationReport;

// --- Prelude ---------------------------------------------------------------

/// Everything needed to run a session.
pub mod prelude {
    pub use crate::image::{RgbFrame, RgbImageU8};
    pub use crate::{
        AnalysisWorker, AnalyzerParams, BallDetector, BoundingBox, CourtAnalyzer, CourtPoint,
        FrameAnalysis, FrameJob, ImageRatioPoint, TrajectoryKind,
    };
}
