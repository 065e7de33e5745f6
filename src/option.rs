//! The option mechanism: units of configuration mutation

use crate::config::Config;
use crate::env;
use crate::error::Result;
use crate::preset::Preset;

/// Default prefix for environment variable overrides
pub const DEFAULT_ENV_PREFIX: &str = "ZAP";

/// A single unit of mutation over a [`Config`]
///
/// Options are immutable once constructed and carry no state between
/// applications. A [`Preset`](ConfigOption::Preset) overwrites the whole
/// configuration; [`EnvOverrides`](ConfigOption::EnvOverrides) touches
/// only the fields for which a matching environment variable is set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigOption {
    /// Whole-configuration overwrite with a named posture
    Preset(Preset),
    /// Sparse field-level overwrite from `<PREFIX>_<FIELD>` environment
    /// variables
    EnvOverrides {
        /// Variable name prefix
        prefix: String,
    },
}

impl ConfigOption {
    /// Apply this option to `config`
    ///
    /// # Errors
    ///
    /// Propagates preset application and environment parse failures.
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        match self {
            ConfigOption::Preset(preset) => preset.apply(config),
            ConfigOption::EnvOverrides { prefix } => env::apply_overrides(prefix, config),
        }
    }

    pub(crate) fn is_preset(&self) -> bool {
        matches!(self, ConfigOption::Preset(_))
    }
}

impl From<Preset> for ConfigOption {
    fn from(preset: Preset) -> Self {
        ConfigOption::Preset(preset)
    }
}

/// Override configuration fields from environment variables
///
/// Variables are looked up as `<PREFIX>_<FIELD>`; an empty `prefix`
/// selects the default prefix `"ZAP"`. Only fields whose variable is
/// actually set are overwritten. For example, to change the log level:
///
/// ```text
/// ZAP_LEVEL=warn
/// ```
///
/// Or to change the encoding:
///
/// ```text
/// ZAP_ENCODING=json
/// ```
///
/// Note that selecting a development or production preset does more than
/// choosing the encoding, so override all of the relevant settings if
/// you want to control the posture manually through the environment.
pub fn env_overrides(prefix: impl Into<String>) -> ConfigOption {
    let prefix = prefix.into();
    ConfigOption::EnvOverrides {
        prefix: if prefix.is_empty() {
            DEFAULT_ENV_PREFIX.to_string()
        } else {
            prefix
        },
    }
}
