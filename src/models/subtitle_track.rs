//! Subtitle track metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A subtitle track attached to a media resource.
///
/// Only tracks backed by an external file can be rendered into the script;
/// embedded tracks are the player's problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleTrack {
    /// Path to the external subtitle file, if the track is file-backed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_file: Option<String>,

    /// Subtitle format
    #[serde(default)]
    pub format: SubtitleFormat,

    /// Language tag (e.g. "eng"), if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl SubtitleTrack {
    /// Create an external-file track.
    pub fn external(path: &str, format: SubtitleFormat) -> Self {
        Self {
            external_file: Some(path.to_string()),
            format,
            language: None,
        }
    }
}

impl fmt::Display for SubtitleTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format.display_name())?;
        if let Some(language) = &self.language {
            write!(f, " ({})", language)?;
        }
        if let Some(file) = &self.external_file {
            write!(f, " [{}]", file)?;
        }
        Ok(())
    }
}

/// Supported subtitle formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    #[default]
    Subrip,
    Text,
    #[serde(rename = "microdvd")]
    MicroDvd,
    Sami,
    Ass,
    Vobsub,
    Unknown,
}

impl SubtitleFormat {
    /// Image-based formats need the bitmap overlay function instead of
    /// the text renderer.
    pub fn is_image_based(&self) -> bool {
        matches!(self, SubtitleFormat::Vobsub)
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SubtitleFormat::Subrip => "SubRip",
            SubtitleFormat::Text => "Plain text",
            SubtitleFormat::MicroDvd => "MicroDVD",
            SubtitleFormat::Sami => "SAMI",
            SubtitleFormat::Ass => "ASS/SSA",
            SubtitleFormat::Vobsub => "VobSub",
            SubtitleFormat::Unknown => "Unknown",
        }
    }
}
