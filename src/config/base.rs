//! Core configuration types

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

use super::EncoderConfig;

/// Logger configuration
///
/// A `Config` is the mutable target that options are applied to. Every
/// build starts from a fresh [`Config::default()`]; nothing is shared
/// between builds. Once a logger has been constructed from it, the
/// engine owns its own copy and the value has no further lifecycle.
///
/// Fields the `tracing-subscriber` engine cannot express (sampling,
/// encoder key names, duration rendering, error output paths) are still
/// carried here so that engines which honor them can consume the same
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum level of emitted log records
    pub level: Level,

    /// Development mode (more eager panics and stacktraces in engines
    /// that distinguish the two postures)
    pub development: bool,

    /// Annotate records with the calling site
    pub capture_caller: bool,

    /// Attach stacktraces to error-level records
    pub capture_stacktrace: bool,

    /// Sampling policy for repeated records
    pub sampling: Sampling,

    /// Output encoding
    pub encoding: Encoding,

    /// Encoder field naming and rendering configuration
    pub encoder: EncoderConfig,

    /// Output destinations ("stderr", "stdout", or a file path)
    pub output_paths: Vec<String>,

    /// Destinations for the engine's own internal errors
    pub error_output_paths: Vec<String>,

    /// Fields attached to every record at construction time
    pub initial_fields: BTreeMap<String, serde_json::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::Info,
            development: false,
            capture_caller: true,
            capture_stacktrace: true,
            sampling: Sampling::default(),
            encoding: Encoding::Json,
            encoder: EncoderConfig::default(),
            output_paths: vec!["stderr".to_string()],
            error_output_paths: vec!["stderr".to_string()],
            initial_fields: BTreeMap::new(),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Trace level
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warn level
    Warn,
    /// Error level
    Error,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Trace => write!(f, "trace"),
            Level::Debug => write!(f, "debug"),
            Level::Info => write!(f, "info"),
            Level::Warn => write!(f, "warn"),
            Level::Error => write!(f, "error"),
        }
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(Error::ParseToken {
                what: "level",
                token: s.to_string(),
            }),
        }
    }
}

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Structured JSON output for machine ingestion
    Json,
    /// Human-readable console output
    Console,
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Json => write!(f, "json"),
            Encoding::Console => write!(f, "console"),
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Encoding::Json),
            "console" => Ok(Encoding::Console),
            _ => Err(Error::ParseToken {
                what: "encoding",
                token: s.to_string(),
            }),
        }
    }
}

/// Sampling policy for repeated records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sampling {
    /// Records of a given shape passed through per second before
    /// sampling kicks in
    pub initial: u32,
    /// Every n-th record passed through thereafter
    pub thereafter: u32,
}

impl Default for Sampling {
    fn default() -> Self {
        Self {
            initial: 100,
            thereafter: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = Config::default();
        assert_eq!(config.level, Level::Info);
        assert!(!config.development);
        assert!(config.capture_caller);
        assert!(config.capture_stacktrace);
        assert_eq!(config.sampling, Sampling { initial: 100, thereafter: 100 });
        assert_eq!(config.encoding, Encoding::Json);
        assert_eq!(config.output_paths, vec!["stderr".to_string()]);
        assert_eq!(config.error_output_paths, vec!["stderr".to_string()]);
        assert!(config.initial_fields.is_empty());
    }

    #[test]
    fn defaults_are_independent() {
        let mut first = Config::default();
        let second = Config::default();

        first.level = Level::Error;
        first.output_paths.push("stdout".to_string());
        first
            .initial_fields
            .insert("app".to_string(), serde_json::json!("test"));

        assert_eq!(second, Config::default());
    }

    #[test]
    fn level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn level_from_str() {
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warn);
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn encoding_from_str() {
        assert_eq!("json".parse::<Encoding>().unwrap(), Encoding::Json);
        assert_eq!("Console".parse::<Encoding>().unwrap(), Encoding::Console);
        assert!("logfmt".parse::<Encoding>().is_err());
    }

    #[test]
    fn config_serde_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
