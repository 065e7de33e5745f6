//! Logger construction from a resolved configuration

use tracing::Dispatch;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, Registry};

use crate::builder::build_configuration;
use crate::config::{Config, Encoding, Level, LevelEncoder};
use crate::error::{Error, Result};
use crate::format::make_timer;
use crate::option::ConfigOption;
use crate::writer::{make_writer, WriterGuards};

/// Construct a logger from a sequence of options
///
/// By default, the development posture is used when running attached to
/// a terminal and the production posture when not. Pass a
/// [`Preset`](crate::Preset) as the first option to choose explicitly.
///
/// When no options are provided, environment overrides are also enabled
/// with the default prefix `"ZAP"`; see [`env_overrides`](crate::env_overrides).
///
/// # Errors
///
/// Surfaces configuration resolution and engine construction errors
/// unchanged.
pub fn new_logger(options: &[ConfigOption]) -> Result<Logger> {
    let config = build_configuration(options)?;
    Logger::from_config(&config)
}

/// Construct a logger or panic
///
/// Identical to [`new_logger`], for startup paths where a logger failing
/// to construct is unrecoverable.
///
/// # Panics
///
/// Panics with the underlying error on any construction failure.
pub fn must_logger(options: &[ConfigOption]) -> Logger {
    match new_logger(options) {
        Ok(logger) => logger,
        Err(e) => panic!("logger construction failed: {e}"),
    }
}

/// A constructed, not-yet-installed logger
///
/// Wraps the engine's dispatcher plus the writer guards that keep
/// non-blocking file writers flushing. Call [`Logger::init`] to install
/// it as the process-wide default.
pub struct Logger {
    dispatch: Dispatch,
    guards: WriterGuards,
}

/// Keeps the installed logger's writers alive
///
/// Hold this for the lifetime of the program; dropping it stops the
/// non-blocking writer workers and unflushed records may be lost.
pub struct LoggerGuard {
    #[allow(dead_code)]
    guards: WriterGuards,
}

impl Logger {
    /// Materialize a logger from a fully-resolved configuration
    ///
    /// Settings without a `tracing-subscriber` counterpart (sampling,
    /// encoder key names, duration rendering, error output paths,
    /// initial fields) are validated where possible but not materialized;
    /// they remain available on the [`Config`] for engines that honor
    /// them.
    ///
    /// # Errors
    ///
    /// Fails when either destination set is unusable (empty, or a file
    /// path without the `file` feature / an unopenable file).
    pub fn from_config(config: &Config) -> Result<Self> {
        if config.error_output_paths.is_empty() {
            return Err(Error::construction(
                "configuration names no error output destination",
            ));
        }

        let (writer, guards) = make_writer(&config.output_paths)?;
        let filter = level_filter(config.level);
        let timer = make_timer(config.encoder.time_encoder);
        let caller = config.capture_caller;

        let dispatch = match config.encoding {
            Encoding::Json => {
                let layer = fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_writer(writer)
                    .with_timer(timer)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(caller)
                    .with_line_number(caller);
                Dispatch::new(Registry::default().with(filter).with(layer))
            }
            Encoding::Console => {
                let ansi = cfg!(feature = "ansi")
                    && matches!(config.encoder.level_encoder, LevelEncoder::CapitalColor);
                let layer = fmt::layer()
                    .pretty()
                    .with_writer(writer)
                    .with_timer(timer)
                    .with_ansi(ansi)
                    .with_target(true)
                    .with_file(caller)
                    .with_line_number(caller);
                Dispatch::new(Registry::default().with(filter).with(layer))
            }
        };

        Ok(Self { dispatch, guards })
    }

    /// The engine dispatcher backing this logger
    ///
    /// Useful with `tracing::dispatcher::with_default` to scope the
    /// logger to a closure instead of installing it globally.
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Install this logger as the process-wide default
    ///
    /// # Errors
    ///
    /// Fails when a global default has already been installed.
    pub fn init(self) -> Result<LoggerGuard> {
        tracing::dispatcher::set_global_default(self.dispatch)
            .map_err(|e| Error::construction(e.to_string()))?;
        Ok(LoggerGuard {
            guards: self.guards,
        })
    }
}

fn level_filter(level: Level) -> LevelFilter {
    match level {
        Level::Trace => LevelFilter::TRACE,
        Level::Debug => LevelFilter::DEBUG,
        Level::Info => LevelFilter::INFO,
        Level::Warn => LevelFilter::WARN,
        Level::Error => LevelFilter::ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::Preset;

    #[test]
    fn constructs_from_both_postures() {
        for preset in [Preset::Development, Preset::Production] {
            let mut config = Config::default();
            preset.apply(&mut config).unwrap();
            assert!(Logger::from_config(&config).is_ok());
        }
    }

    // The console posture must construct (and stay colorless) even when
    // the crate's `ansi` color switch is compiled out.
    #[cfg(not(feature = "ansi"))]
    #[test]
    fn console_posture_constructs_without_ansi() {
        let mut config = Config::default();
        Preset::Development.apply(&mut config).unwrap();

        let logger = Logger::from_config(&config).unwrap();
        tracing::dispatcher::with_default(logger.dispatch(), || {
            tracing::info!("colorless console event");
        });
    }

    #[test]
    fn empty_output_set_is_a_construction_error() {
        let mut config = Config::default();
        config.output_paths.clear();
        assert!(matches!(
            Logger::from_config(&config),
            Err(Error::Construction { .. })
        ));
    }

    #[test]
    fn empty_error_output_set_is_a_construction_error() {
        let mut config = Config::default();
        config.error_output_paths.clear();
        assert!(matches!(
            Logger::from_config(&config),
            Err(Error::Construction { .. })
        ));
    }

    #[test]
    fn dispatch_accepts_events_without_global_install() {
        let logger = new_logger(&[Preset::Production.into()]).unwrap();
        tracing::dispatcher::with_default(logger.dispatch(), || {
            tracing::info!(test = true, "scoped event");
        });
    }

    #[test]
    fn level_filter_mapping() {
        assert_eq!(level_filter(Level::Trace), LevelFilter::TRACE);
        assert_eq!(level_filter(Level::Error), LevelFilter::ERROR);
    }
}
