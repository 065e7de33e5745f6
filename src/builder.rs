//! Configuration resolution
//!
//! Combines the default configuration, an optional preset, and an
//! ordered sequence of overrides into one final [`Config`].

use crate::config::Config;
use crate::error::{Error, Result};
use crate::option::{env_overrides, ConfigOption};
use crate::preset::Preset;

/// Resolve a sequence of options into a final configuration
///
/// Resolution starts from [`Config::default()`] and applies each option
/// in the supplied order, left to right. Later options win field-by-field
/// on conflict.
///
/// When no options are supplied, the canonical default sequence
/// `[Dynamic, env_overrides("")]` is used instead: auto-detect the
/// posture from terminal attachment, then let `ZAP_*` environment
/// variables win.
///
/// # Errors
///
/// A preset anywhere but first position fails with
/// [`Error::PresetOrdering`], since a preset overwrites the whole
/// configuration and would silently discard everything applied before
/// it. Any failing option aborts the build; no partial configuration is
/// returned in either case.
pub fn build_configuration(options: &[ConfigOption]) -> Result<Config> {
    let fallback;
    let options = if options.is_empty() {
        fallback = [Preset::Dynamic.into(), env_overrides("")];
        &fallback[..]
    } else {
        options
    };

    let mut config = Config::default();
    for (index, option) in options.iter().enumerate() {
        if option.is_preset() && index > 0 {
            return Err(Error::PresetOrdering { index });
        }
        option.apply(&mut config)?;
    }
    Ok(config)
}
