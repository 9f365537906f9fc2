//! Script generation job description.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AvsSettings, SubtitleTrack};

/// Represents one request to generate an AviSynth input script.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptJob {
    /// Unique job identifier
    pub id: Uuid,

    /// Input media file path
    pub input_path: String,

    /// Frame rate as a rational string (e.g. "24000/1001"), if probed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate_ratio: Option<String>,

    /// Frame rate as a decimal string (e.g. "23.976"), if probed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<String>,

    /// Subtitle track selected for overlay, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<SubtitleTrack>,

    /// Script generation settings
    #[serde(default)]
    pub settings: AvsSettings,
}

impl ScriptJob {
    /// Create a job for a media path with default settings.
    pub fn new(input_path: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            input_path: input_path.to_string(),
            frame_rate_ratio: None,
            frame_rate: None,
            subtitle: None,
            settings: AvsSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_deserialization_with_defaults() {
        let json = r#"{
            "id": "b9f0a2a4-3c55-4e21-9ac1-6a6f6c1f2d10",
            "inputPath": "C:\\media\\movie.mkv"
        }"#;
        let job: ScriptJob = serde_json::from_str(json).unwrap();
        assert_eq!(job.input_path, "C:\\media\\movie.mkv");
        assert!(job.frame_rate_ratio.is_none());
        assert!(job.subtitle.is_none());
        assert!(!job.settings.multithreading);
    }

    #[test]
    fn test_job_serialization_omits_unset_fields() {
        let job = ScriptJob::new("/media/movie.mkv");
        let json = serde_json::to_string(&job).unwrap();
        assert!(json.contains("\"inputPath\":\"/media/movie.mkv\""));
        assert!(!json.contains("frameRateRatio"));
        assert!(!json.contains("subtitle\""));
    }
}
