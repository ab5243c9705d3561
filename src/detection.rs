//! Ball detections supplied by an external detector.
use crate::image::RgbImageU8;
use crate::types::ImageRatioPoint;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Axis-aligned box in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BoundingBox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn center(&self) -> [f32; 2] {
        [(self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0]
    }

    /// Box centre, truncated to whole pixels, divided by the frame size.
    /// `None` for an empty frame or a non-finite box.
    pub fn to_image_ratio(&self, frame_w: usize, frame_h: usize) -> Option<ImageRatioPoint> {
        if frame_w == 0 || frame_h == 0 {
            return None;
        }
        let [cx, cy] = self.center();
        if !cx.is_finite() || !cy.is_finite() {
            return None;
        }
        Some(ImageRatioPoint::new(
            cx.trunc() / frame_w as f32,
            cy.trunc() / frame_h as f32,
        ))
    }
}

/// Anything that can find the ball in a frame.
///
/// Only the first returned box is used.
pub trait BallDetector {
    fn detect(&mut self, frame: RgbImageU8<'_>) -> Vec<BoundingBox>;
}

/// Replays a pre-recorded sequence of per-frame detections. Once the script
/// runs out every frame reports no ball.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDetector {
    script: VecDeque<Option<BoundingBox>>,
}

impl ScriptedDetector {
    pub fn new(script: impl IntoIterator<Item = Option<BoundingBox>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl BallDetector for ScriptedDetector {
    fn detect(&mut self, _frame: RgbImageU8<'_>) -> Vec<BoundingBox> {
        self.script.pop_front().flatten().into_iter().collect()
    }
}
