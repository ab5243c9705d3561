use crate::types::{CourtPoint, ImageRatioPoint};
use serde::Serialize;
use std::collections::VecDeque;

/// One frame's ball position in both coordinate spaces; either may be absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectorySample {
    pub image: Option<ImageRatioPoint>,
    pub court: Option<CourtPoint>,
}

impl TrajectorySample {
    pub const MISSING: TrajectorySample = TrajectorySample {
        image: None,
        court: None,
    };
}

/// Fixed-capacity FIFO of recent samples; the oldest entry is evicted first.
#[derive(Clone, Debug)]
pub struct TrajectoryBuffer {
    samples: VecDeque<TrajectorySample>,
    capacity: usize,
}

impl TrajectoryBuffer {
    /// A zero capacity is bumped to one so the previous sample is always
    /// available.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, sample: TrajectorySample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Most recent sample.
    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &TrajectorySample> {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(i: usize) -> TrajectorySample {
        TrajectorySample {
            image: Some(ImageRatioPoint::new(i as f32, 0.0)),
            court: None,
        }
    }

    #[test]
    fn keeps_most_recent_samples_in_order() {
        let mut buffer = TrajectoryBuffer::new(30);
        for i in 0..45 {
            buffer.push(sample(i));
            assert!(buffer.len() <= 30);
        }
        assert_eq!(buffer.len(), 30);
        let xs: Vec<usize> = buffer
            .iter()
            .map(|s| s.image.map(|p| p.x as usize).unwrap_or(usize::MAX))
            .collect();
        assert_eq!(xs, (15..45).collect::<Vec<_>>());
        assert_eq!(buffer.last(), Some(&sample(44)));
    }

    #[test]
    fn zero_capacity_still_holds_latest() {
        let mut buffer = TrajectoryBuffer::new(0);
        buffer.push(sample(1));
        buffer.push(TrajectorySample::MISSING);
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.last(), Some(&TrajectorySample::MISSING));
    }
}
