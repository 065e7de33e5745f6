//! Encoder field naming and rendering configuration

use serde::{Deserialize, Serialize};

/// Encoder configuration
///
/// Names the keys under which standard record attributes are emitted and
/// selects how levels, times, durations, and callers are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Key for the log message
    pub message_key: String,
    /// Key for the level
    pub level_key: String,
    /// Key for the timestamp
    pub time_key: String,
    /// Key for the logger name
    pub name_key: String,
    /// Key for the calling site
    pub caller_key: String,
    /// Key for the stacktrace
    pub stacktrace_key: String,
    /// Line terminator appended to each record
    pub line_ending: String,
    /// Level rendering
    pub level_encoder: LevelEncoder,
    /// Timestamp rendering
    pub time_encoder: TimeEncoder,
    /// Duration rendering
    pub duration_encoder: DurationEncoder,
    /// Caller rendering
    pub caller_encoder: CallerEncoder,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            message_key: "msg".to_string(),
            level_key: "level".to_string(),
            time_key: "ts".to_string(),
            name_key: "logger".to_string(),
            caller_key: "caller".to_string(),
            stacktrace_key: "stacktrace".to_string(),
            line_ending: "\n".to_string(),
            level_encoder: LevelEncoder::Lowercase,
            time_encoder: TimeEncoder::Iso8601,
            duration_encoder: DurationEncoder::Seconds,
            caller_encoder: CallerEncoder::Short,
        }
    }
}

/// Level rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelEncoder {
    /// Lowercase level name ("info")
    Lowercase,
    /// Capitalized level name ("INFO")
    Capital,
    /// Capitalized level name with ANSI color
    CapitalColor,
}

/// Timestamp rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeEncoder {
    /// ISO 8601 / RFC 3339 text
    Iso8601,
    /// Seconds since the Unix epoch
    Epoch,
    /// Milliseconds since the Unix epoch
    Millis,
}

/// Duration rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationEncoder {
    /// Fractional seconds as a number
    Seconds,
    /// Human-readable string ("1.5s")
    String,
    /// Integer milliseconds
    Millis,
}

/// Caller rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallerEncoder {
    /// Trimmed path ("pkg/file.rs:42")
    Short,
    /// Full path
    Full,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys() {
        let encoder = EncoderConfig::default();
        assert_eq!(encoder.message_key, "msg");
        assert_eq!(encoder.level_key, "level");
        assert_eq!(encoder.time_key, "ts");
        assert_eq!(encoder.name_key, "logger");
        assert_eq!(encoder.caller_key, "caller");
        assert_eq!(encoder.stacktrace_key, "stacktrace");
        assert_eq!(encoder.line_ending, "\n");
        assert_eq!(encoder.level_encoder, LevelEncoder::Lowercase);
        assert_eq!(encoder.time_encoder, TimeEncoder::Iso8601);
        assert_eq!(encoder.duration_encoder, DurationEncoder::Seconds);
        assert_eq!(encoder.caller_encoder, CallerEncoder::Short);
    }

    #[test]
    fn selector_serde_tokens() {
        assert_eq!(
            serde_json::to_string(&LevelEncoder::CapitalColor).unwrap(),
            "\"capitalcolor\""
        );
        assert_eq!(
            serde_json::from_str::<TimeEncoder>("\"iso8601\"").unwrap(),
            TimeEncoder::Iso8601
        );
        assert_eq!(
            serde_json::from_str::<DurationEncoder>("\"string\"").unwrap(),
            DurationEncoder::String
        );
    }
}
