//! Named configuration presets

use std::io::IsTerminal;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{Config, DurationEncoder, Encoding, LevelEncoder};
use crate::error::{Error, Result};

/// A named runtime posture applied as a whole-configuration overwrite
///
/// A preset is a clean-slate choice between human debugging and machine
/// ingestion; it replaces the entire configuration rather than merging
/// into it, so that encoder and output settings never end up in an
/// inconsistent mix.
///
/// The zero value is [`Preset::Invalid`]: it can never be applied or
/// rendered, which makes an uninitialized or mis-parsed preset fail
/// loudly instead of silently selecting a posture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// Never valid as input; applying or rendering it is an error
    #[default]
    Invalid,
    /// Console encoding, colored capitalized levels, human-readable
    /// durations
    Development,
    /// JSON encoding, lowercase levels, durations in seconds
    Production,
    /// Development when standard output is an interactive terminal,
    /// Production otherwise; resolved at apply time
    Dynamic,
}

impl Preset {
    /// Render the preset as its lowercase text token
    ///
    /// # Errors
    ///
    /// [`Preset::Invalid`] has no valid text form.
    pub fn as_str(&self) -> Result<&'static str> {
        match self {
            Preset::Development => Ok("development"),
            Preset::Production => Ok("production"),
            Preset::Dynamic => Ok("dynamic"),
            Preset::Invalid => Err(Error::InvalidPreset),
        }
    }

    /// Overwrite `config` with this preset's posture
    ///
    /// # Errors
    ///
    /// Fails for [`Preset::Invalid`], leaving `config` untouched.
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        match self {
            Preset::Development => {
                *config = Config::default();
                config.development = true;
                config.encoding = Encoding::Console;
                config.encoder.level_encoder = LevelEncoder::CapitalColor;
                config.encoder.duration_encoder = DurationEncoder::String;
                Ok(())
            }
            Preset::Production => {
                *config = Config::default();
                config.development = false;
                config.encoding = Encoding::Json;
                config.encoder.level_encoder = LevelEncoder::Lowercase;
                config.encoder.duration_encoder = DurationEncoder::Seconds;
                Ok(())
            }
            Preset::Dynamic => {
                // Only stdout is probed; the default destinations always
                // target the same stream pair, so a partially redirected
                // process intentionally follows its stdout.
                Self::resolve_dynamic(std::io::stdout().is_terminal()).apply(config)
            }
            Preset::Invalid => Err(Error::InvalidPreset),
        }
    }

    /// Pure resolution seam for [`Preset::Dynamic`]
    pub(crate) fn resolve_dynamic(stdout_is_terminal: bool) -> Preset {
        if stdout_is_terminal {
            Preset::Development
        } else {
            Preset::Production
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str().unwrap_or("invalid"))
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "development" => Ok(Preset::Development),
            "production" => Ok(Preset::Production),
            "dynamic" => Ok(Preset::Dynamic),
            _ => Err(Error::ParsePreset {
                token: s.to_string(),
            }),
        }
    }
}

impl Serialize for Preset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.as_str() {
            Ok(token) => serializer.serialize_str(token),
            Err(e) => Err(serde::ser::Error::custom(e)),
        }
    }
}

impl<'de> Deserialize<'de> for Preset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_overwrites_to_console_posture() {
        let mut config = Config::default();
        config.output_paths = vec!["stdout".to_string()];

        Preset::Development.apply(&mut config).unwrap();

        assert!(config.development);
        assert_eq!(config.encoding, Encoding::Console);
        assert_eq!(config.encoder.level_encoder, LevelEncoder::CapitalColor);
        assert_eq!(config.encoder.duration_encoder, DurationEncoder::String);
        // clean slate: the earlier destination override is gone
        assert_eq!(config.output_paths, vec!["stderr".to_string()]);
    }

    #[test]
    fn production_after_development_leaves_nothing_behind() {
        let mut config = Config::default();
        Preset::Development.apply(&mut config).unwrap();
        Preset::Production.apply(&mut config).unwrap();

        let mut expected = Config::default();
        Preset::Production.apply(&mut expected).unwrap();
        assert_eq!(config, expected);
        assert!(!config.development);
        assert_eq!(config.encoding, Encoding::Json);
    }

    #[test]
    fn invalid_apply_fails_without_touching_config() {
        let mut config = Config::default();
        config.development = true;
        let before = config.clone();

        assert!(matches!(
            Preset::Invalid.apply(&mut config),
            Err(Error::InvalidPreset)
        ));
        assert_eq!(config, before);
    }

    #[test]
    fn dynamic_resolves_by_terminal_attachment() {
        assert_eq!(Preset::resolve_dynamic(true), Preset::Development);
        assert_eq!(Preset::resolve_dynamic(false), Preset::Production);
    }

    #[test]
    fn text_round_trip() {
        for preset in [Preset::Development, Preset::Production, Preset::Dynamic] {
            let token = preset.as_str().unwrap();
            assert_eq!(token.parse::<Preset>().unwrap(), preset);
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("Development".parse::<Preset>().unwrap(), Preset::Development);
        assert_eq!("PRODUCTION".parse::<Preset>().unwrap(), Preset::Production);
    }

    #[test]
    fn unknown_token_fails() {
        assert!(matches!(
            "staging".parse::<Preset>(),
            Err(Error::ParsePreset { .. })
        ));
        assert!("".parse::<Preset>().is_err());
        // the sentinel's own name is not accepted as input
        assert!("invalid".parse::<Preset>().is_err());
    }

    #[test]
    fn invalid_cannot_render() {
        assert!(matches!(Preset::Invalid.as_str(), Err(Error::InvalidPreset)));
        assert!(serde_json::to_string(&Preset::Invalid).is_err());
    }

    #[test]
    fn serde_round_trip() {
        for preset in [Preset::Development, Preset::Production, Preset::Dynamic] {
            let json = serde_json::to_string(&preset).unwrap();
            let back: Preset = serde_json::from_str(&json).unwrap();
            assert_eq!(back, preset);
        }
    }

    #[test]
    fn default_is_the_invalid_sentinel() {
        assert_eq!(Preset::default(), Preset::Invalid);
    }
}
