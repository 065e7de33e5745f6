//! Configuration types
//!
//! This module provides the configuration value that option application
//! mutates, organized into:
//! - `base`: core configuration struct plus level/encoding/sampling types
//! - `encoder`: encoder field naming and rendering selectors

mod base;
mod encoder;

pub use base::{Config, Encoding, Level, Sampling};
pub use encoder::{CallerEncoder, DurationEncoder, EncoderConfig, LevelEncoder, TimeEncoder};
