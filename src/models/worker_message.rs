//! Messages sent from the worker to the host process.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Messages sent from worker to host via stdout, one JSON object per line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkerMessage {
    /// Log message
    Log {
        level: String,
        message: String,
        timestamp: DateTime<Utc>,
    },

    /// Error message
    Error {
        message: String,
    },

    /// Job completion
    Complete {
        success: bool,
        #[serde(rename = "scriptPath", skip_serializing_if = "Option::is_none")]
        script_path: Option<String>,
    },
}

impl WorkerMessage {
    /// Create a log message stamped with the current time.
    pub fn log(level: LogLevel, message: &str) -> Self {
        WorkerMessage::Log {
            level: level.as_str().to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Create an error message.
    pub fn error(message: &str) -> Self {
        WorkerMessage::Error {
            message: message.to_string(),
        }
    }

    /// Create a completion message.
    pub fn complete(success: bool, script_path: Option<&str>) -> Self {
        WorkerMessage::Complete {
            success,
            script_path: script_path.map(String::from),
        }
    }
}

/// Log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_message_serialization() {
        let msg = WorkerMessage::log(LogLevel::Info, "Using subtitle track");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"log\""));
        assert!(json.contains("\"level\":\"info\""));
        assert!(json.contains("\"timestamp\""));
    }

    #[test]
    fn test_complete_message_serialization() {
        let msg = WorkerMessage::complete(true, Some("/tmp/avsprep-movie.mkv.avs"));
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"complete\""));
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"scriptPath\""));
    }

    #[test]
    fn test_complete_message_omits_missing_path() {
        let msg = WorkerMessage::complete(false, None);
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("scriptPath"));
    }
}
