//! # tracing-defaults - Layered logger configuration
//!
//! Builds a logger configuration from layered defaults, named presets,
//! and environment variable overrides, then constructs a [`tracing`]
//! logger from it.
//!
//! ## Quick start
//!
//! ```rust
//! use tracing_defaults::prelude::*;
//!
//! fn main() -> tracing_defaults::Result<()> {
//!     // Auto-detect posture, then let ZAP_* environment variables win
//!     let _guard = new_logger(&[])?.init()?;
//!
//!     info!(port = 8080, "server starting");
//!     Ok(())
//! }
//! ```
//!
//! ## Resolution pipeline
//!
//! Every build starts from [`Config::default()`] and applies the
//! supplied options in order. A [`Preset`] is a whole-configuration
//! overwrite and must come first; [`env_overrides`] is a sparse
//! field-level overwrite that only touches fields whose `<PREFIX>_*`
//! variable is set. With no options at all, the sequence
//! `[Preset::Dynamic, env_overrides("")]` is used: development posture
//! on a terminal, production posture otherwise, environment last.
//!
//! ```rust
//! use tracing_defaults::{build_configuration, env_overrides, Encoding, Preset};
//!
//! # fn main() -> tracing_defaults::Result<()> {
//! let config = build_configuration(&[Preset::Production.into(), env_overrides("MYAPP")])?;
//! assert_eq!(config.encoding, Encoding::Json);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod env;
mod error;
mod format;
mod logger;
mod option;
mod preset;
mod writer;

// Public API
pub use builder::build_configuration;
pub use config::{
    CallerEncoder, Config, DurationEncoder, EncoderConfig, Encoding, Level, LevelEncoder,
    Sampling, TimeEncoder,
};
pub use error::{Error, Result};
pub use logger::{must_logger, new_logger, Logger, LoggerGuard};
pub use option::{env_overrides, ConfigOption, DEFAULT_ENV_PREFIX};
pub use preset::Preset;

// Re-export tracing macros so consumers get one import surface
pub use tracing::{debug, error, info, span, trace, warn};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        build_configuration, env_overrides, must_logger, new_logger, Level, Preset, Result,
    };

    pub use tracing::{debug, error, info, trace, warn};
}
