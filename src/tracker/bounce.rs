//! Bounce detection on the court `y` coordinate.
//!
//! [`BounceDetector`] is a two-state hysteresis machine (not falling /
//! falling). A frame-to-frame increase of `y` beyond the threshold arms it; a
//! decrease beyond the threshold while armed confirms a bounce and disarms it.
//! Losing the ball disarms it but leaves the last known `y` in place, so the
//! first sample after a gap is compared against the last observed height.
//!
//! Confirmed bounces go through a [`BounceJudge`] and end up in the
//! append-only [`BounceHistory`].
use crate::types::ImageRatioPoint;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Snapshot of the detector's state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerState {
    pub previous_y: Option<f32>,
    pub is_falling: bool,
}

/// What a single `y` update did to the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// First observation; only the starting height was recorded.
    Primed,
    /// Downward motion beyond the threshold.
    Falling,
    /// Upward motion beyond the threshold right after a fall.
    Bounce,
    /// Anything else.
    Unchanged,
}

#[derive(Clone, Debug)]
pub struct BounceDetector {
    threshold: f32,
    state: TrackerState,
}

impl BounceDetector {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.abs(),
            state: TrackerState::default(),
        }
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Feed the current court `y` (down = increasing).
    pub fn update(&mut self, y: f32) -> Transition {
        let transition = match self.state.previous_y {
            None => Transition::Primed,
            Some(prev) => {
                let delta = y - prev;
                if delta > self.threshold {
                    self.state.is_falling = true;
                    Transition::Falling
                } else if delta < -self.threshold && self.state.is_falling {
                    self.state.is_falling = false;
                    Transition::Bounce
                } else {
                    Transition::Unchanged
                }
            }
        };
        self.state.previous_y = Some(y);
        transition
    }

    /// Ball not observed this frame. Only the falling flag is cleared;
    /// `previous_y` keeps the last known height.
    pub fn lose_track(&mut self) {
        self.state.is_falling = false;
    }
}

/// Classification attached to a bounce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BounceCall {
    Good,
}

impl fmt::Display for BounceCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => f.write_str("Good"),
        }
    }
}

/// Extension point for judging a bounce location, e.g. in/out calls against
/// the court lines. The tracker ships with [`AcceptAllJudge`].
pub trait BounceJudge: Send {
    fn judge(&self, location: ImageRatioPoint) -> BounceCall;
}

/// Labels every bounce [`BounceCall::Good`].
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAllJudge;

impl BounceJudge for AcceptAllJudge {
    fn judge(&self, _location: ImageRatioPoint) -> BounceCall {
        BounceCall::Good
    }
}

/// A confirmed bounce at an image-ratio location.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BounceEvent {
    pub x: f32,
    pub y: f32,
    pub call: BounceCall,
    /// Zero-based index of the frame that confirmed the bounce.
    pub frame_index: u64,
}

/// Ordered, append-only list of bounces.
///
/// Readers get cheap immutable snapshots; a snapshot never changes after it
/// was taken, and later snapshots always extend earlier ones.
#[derive(Clone, Debug)]
pub struct BounceHistory {
    events: Vec<BounceEvent>,
    snapshot: Arc<[BounceEvent]>,
}

impl Default for BounceHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl BounceHistory {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            snapshot: Arc::from(Vec::new()),
        }
    }

    pub(crate) fn append(&mut self, event: BounceEvent) {
        self.events.push(event);
        self.snapshot = Arc::from(self.events.as_slice());
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&BounceEvent> {
        self.events.last()
    }

    pub fn as_slice(&self) -> &[BounceEvent] {
        &self.events
    }

    pub fn snapshot(&self) -> Arc<[BounceEvent]> {
        Arc::clone(&self.snapshot)
    }
}
