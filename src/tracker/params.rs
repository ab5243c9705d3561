use serde::{Deserialize, Serialize};

/// Tunables of the trajectory tracker.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackerParams {
    /// Number of most recent samples kept in the trajectory buffer.
    pub buffer_capacity: usize,
    /// Minimum per-frame change of court `y` that counts as vertical motion.
    pub bounce_threshold: f32,
    /// Buffered samples required before a trajectory label is produced.
    pub min_classification_samples: usize,
    /// Used when the caller passes a non-positive or non-finite fps.
    pub default_fps: f32,
}

impl Default for TrackerParams {
    fn default() -> Self {
        Self {
            buffer_capacity: 30,
            bounce_threshold: 0.01,
            min_classification_samples: 5,
            default_fps: 30.0,
        }
    }
}
