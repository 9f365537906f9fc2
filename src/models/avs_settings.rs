//! Script generation settings.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::script_template;

/// Toggles and paths controlling script generation.
///
/// Mirrors the server's AviSynth settings panel; every field has a serde
/// default so partial job JSON stays valid as the panel grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvsSettings {
    /// Emit multithreading directives
    #[serde(default)]
    pub multithreading: bool,

    /// CPU cores reported by the host, used for UI estimates only
    #[serde(default = "default_cpu_cores")]
    pub cpu_cores: i32,

    /// Request constant-frame-rate conversion from the source filter.
    /// The source-line clause is disabled; the toggle is carried for the
    /// settings surface but does not change the emitted script.
    #[serde(default)]
    pub convert_fps: bool,

    /// Emit the frame-interpolation filter
    #[serde(default)]
    pub interframe: bool,

    /// Let the interpolation filter use the GPU
    #[serde(default)]
    pub interframe_gpu: bool,

    /// Overlay external subtitles automatically
    #[serde(default = "default_true")]
    pub autoload_subtitles: bool,

    /// Global subtitle kill switch, wins over autoload
    #[serde(default)]
    pub disable_subtitles: bool,

    /// Directory receiving generated script artifacts
    #[serde(default = "default_temp_dir")]
    pub temp_dir: PathBuf,

    /// Raw user script template, empty for the default layout
    #[serde(default)]
    pub script_template: String,

    /// Separator between template statements
    #[serde(default = "default_template_separator")]
    pub template_separator: String,
}

fn default_cpu_cores() -> i32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_temp_dir() -> PathBuf {
    env::temp_dir()
}

fn default_template_separator() -> String {
    script_template::DEFAULT_SEPARATOR.to_string()
}

impl Default for AvsSettings {
    fn default() -> Self {
        Self {
            multithreading: false,
            cpu_cores: default_cpu_cores(),
            convert_fps: false,
            interframe: false,
            interframe_gpu: false,
            autoload_subtitles: true,
            disable_subtitles: false,
            temp_dir: default_temp_dir(),
            script_template: String::new(),
            template_separator: default_template_separator(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_yields_defaults() {
        let settings: AvsSettings = serde_json::from_str("{}").unwrap();
        assert!(!settings.multithreading);
        assert_eq!(settings.cpu_cores, 1);
        assert!(settings.autoload_subtitles);
        assert!(!settings.disable_subtitles);
        assert_eq!(settings.template_separator, "\u{1}");
        assert!(settings.script_template.is_empty());
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = r#"{"interframeGpu": true, "autoloadSubtitles": false}"#;
        let settings: AvsSettings = serde_json::from_str(json).unwrap();
        assert!(settings.interframe_gpu);
        assert!(!settings.autoload_subtitles);
    }
}
