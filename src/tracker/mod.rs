//! Streaming ball-trajectory tracker.
//!
//! Consumes one (possibly absent) observation per frame, in frame order, and
//! maintains:
//! - a bounded buffer of recent samples (`buffer`),
//! - the raw instantaneous speed in court units per second,
//! - a coarse trajectory label,
//! - the bounce state machine and the append-only bounce history (`bounce`).
//!
//! Frames must arrive in strictly increasing temporal order; the tracker does
//! not check it.

pub mod bounce;
pub mod buffer;
pub mod params;

pub use bounce::{
    AcceptAllJudge, BounceCall, BounceDetector, BounceEvent, BounceHistory, BounceJudge,
    TrackerState, Transition,
};
pub use buffer::{TrajectoryBuffer, TrajectorySample};
pub use params::TrackerParams;

use crate::types::{CourtPoint, ImageRatioPoint};
use log::info;
use serde::Serialize;
use std::fmt;

/// Coarse shape of the recent trajectory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum TrajectoryKind {
    /// Ball not observed this frame or too few samples buffered.
    #[default]
    #[serde(rename = "N/A")]
    NotAvailable,
    Flat,
}

impl fmt::Display for TrajectoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAvailable => f.write_str("N/A"),
            Self::Flat => f.write_str("Flat"),
        }
    }
}

/// Per-frame result of [`TrajectoryTracker::observe`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackOutput {
    /// Court units per second; zero without a previous court position.
    pub speed: f32,
    pub trajectory: TrajectoryKind,
    /// Bounce confirmed by this frame, if any (already in the history).
    pub bounce: Option<BounceEvent>,
}

pub struct TrajectoryTracker {
    params: TrackerParams,
    buffer: TrajectoryBuffer,
    detector: BounceDetector,
    history: BounceHistory,
    judge: Box<dyn BounceJudge>,
    frames: u64,
}

impl TrajectoryTracker {
    pub fn new(params: TrackerParams) -> Self {
        Self::with_judge(params, Box::new(AcceptAllJudge))
    }

    pub fn with_judge(params: TrackerParams, judge: Box<dyn BounceJudge>) -> Self {
        Self {
            buffer: TrajectoryBuffer::new(params.buffer_capacity),
            detector: BounceDetector::new(params.bounce_threshold),
            history: BounceHistory::new(),
            judge,
            frames: 0,
            params,
        }
    }

    /// Process one frame's observation.
    ///
    /// `court_point` decides the branch: without it the frame counts as "ball
    /// not observed" even if `image_point` is known (e.g. before calibration).
    pub fn observe(
        &mut self,
        image_point: Option<ImageRatioPoint>,
        court_point: Option<CourtPoint>,
        fps: f32,
    ) -> TrackOutput {
        let frame_index = self.frames;
        self.frames += 1;

        let Some(court) = court_point else {
            self.buffer.push(TrajectorySample::MISSING);
            self.detector.lose_track();
            return TrackOutput::default();
        };

        let previous = self.buffer.last().copied();
        let speed = previous
            .and_then(|s| s.court)
            .map(|prev| court.distance(&prev) * self.effective_fps(fps))
            .unwrap_or(0.0);

        let mut bounce = None;
        if self.detector.update(court.y) == Transition::Bounce {
            // The bounce happened around the lowest point: the previous sample.
            if let Some(location) = previous.and_then(|s| s.image) {
                let event = BounceEvent {
                    x: location.x,
                    y: location.y,
                    call: self.judge.judge(location),
                    frame_index,
                };
                info!(
                    "bounce #{} at ({:.3}, {:.3}) frame {} -> {}",
                    self.history.len() + 1,
                    event.x,
                    event.y,
                    frame_index,
                    event.call
                );
                self.history.append(event);
                bounce = Some(event);
            }
        }

        self.buffer.push(TrajectorySample {
            image: image_point,
            court: Some(court),
        });

        TrackOutput {
            speed,
            trajectory: self.classify(),
            bounce,
        }
    }

    fn effective_fps(&self, fps: f32) -> f32 {
        if fps.is_finite() && fps > 0.0 {
            fps
        } else {
            self.params.default_fps
        }
    }

    fn classify(&self) -> TrajectoryKind {
        if self.buffer.len() < self.params.min_classification_samples {
            TrajectoryKind::NotAvailable
        } else {
            TrajectoryKind::Flat
        }
    }

    pub fn history(&self) -> &BounceHistory {
        &self.history
    }

    pub fn buffer(&self) -> &TrajectoryBuffer {
        &self.buffer
    }

    pub fn state(&self) -> TrackerState {
        self.detector.state()
    }

    /// Frames observed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn params(&self) -> &TrackerParams {
        &self.params
    }
}

impl Default for TrajectoryTracker {
    fn default() -> Self {
        Self::new(TrackerParams::default())
    }
}
