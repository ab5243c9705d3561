//! JSON configuration for the command-line tools.
//!
//! Every section is optional and falls back to the library defaults, so an
//! empty object `{}` is a valid [`AnalyzerConfig`].
use crate::analyzer::{AnalyzerParams, CourtType};
use crate::calibration::CalibrationParams;
use crate::detection::BoundingBox;
use crate::tracker::TrackerParams;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzerConfig {
    pub calibration: CalibrationParams,
    pub tracker: TrackerParams,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    pub court_type: CourtType,
    pub fps: f32,
    pub annotate: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            court_type: CourtType::Singles,
            fps: 30.0,
            annotate: false,
        }
    }
}

impl AnalyzerConfig {
    pub fn into_params(self) -> AnalyzerParams {
        AnalyzerParams {
            calibration: self.calibration,
            tracker: self.tracker,
            court_type: self.session.court_type,
            default_fps: self.session.fps,
            annotate: self.session.annotate,
        }
    }
}

/// Shared config of `court_calibrate` and `replay_track`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoConfig {
    /// Image used for calibration (and as every replayed frame).
    pub input: PathBuf,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    /// One entry per replayed frame; `null` means no ball detected.
    #[serde(default)]
    pub detections: Vec<Option<BoundingBox>>,
    #[serde(default)]
    pub output: DemoOutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DemoOutputConfig {
    pub report_json: Option<PathBuf>,
    pub annotated_image: Option<PathBuf>,
    pub edges_image: Option<PathBuf>,
}

pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_resolves_to_defaults() {
        let config: AnalyzerConfig = serde_json::from_str("{}").unwrap();
        let params = config.into_params();
        assert_eq!(params.default_fps, 30.0);
        assert_eq!(params.court_type, CourtType::Singles);
        assert_eq!(params.tracker.buffer_capacity, 30);
        assert_eq!(params.calibration.hough.threshold, 150);
        assert!(!params.annotate);
    }

    #[test]
    fn partial_sections_override_fields() {
        let json = r#"{
            "input": "court.png",
            "analyzer": {
                "tracker": { "bounceThreshold": 0.02 },
                "session": { "courtType": "doubles", "fps": 60.0 }
            },
            "detections": [null, { "x1": 1.0, "y1": 2.0, "x2": 3.0, "y2": 4.0 }]
        }"#;
        let config: DemoConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.input, PathBuf::from("court.png"));
        assert_eq!(config.detections.len(), 2);
        assert!(config.detections[0].is_none());
        assert!(config.output.report_json.is_none());
        let params = config.analyzer.into_params();
        assert_eq!(params.tracker.bounce_threshold, 0.02);
        assert_eq!(params.tracker.buffer_capacity, 30);
        assert_eq!(params.court_type, CourtType::Doubles);
        assert_eq!(params.default_fps, 60.0);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_config::<AnalyzerConfig>(Path::new("/nonexistent/court.json")).unwrap_err();
        assert!(err.contains("Failed to read config"));
    }
}
