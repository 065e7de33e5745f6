//! Environment variable overrides
//!
//! Realizes the sparse field-level overwrite behind
//! [`env_overrides`](crate::env_overrides): every recognized
//! configuration field has one `<PREFIX>_<FIELD>` variable, fields
//! without a matching variable are left untouched, and an unparseable
//! value fails the whole application naming the offending variable.
//! Variables under the prefix that do not name a recognized field are
//! ignored.

use std::str::FromStr;

use crate::config::{Config, Encoding, Level};
use crate::error::{Error, Result};

/// Apply `<prefix>_<FIELD>` overrides to `config`
pub(crate) fn apply_overrides(prefix: &str, config: &mut Config) -> Result<()> {
    if let Some((var, value)) = lookup(prefix, "LEVEL") {
        config.level = parse_token::<Level>(&var, &value)?;
    }
    if let Some((var, value)) = lookup(prefix, "DEVELOPMENT") {
        config.development = parse_bool(&var, &value)?;
    }
    if let Some((var, value)) = lookup(prefix, "CAPTURE_CALLER") {
        config.capture_caller = parse_bool(&var, &value)?;
    }
    if let Some((var, value)) = lookup(prefix, "CAPTURE_STACKTRACE") {
        config.capture_stacktrace = parse_bool(&var, &value)?;
    }
    if let Some((var, value)) = lookup(prefix, "SAMPLING_INITIAL") {
        config.sampling.initial = parse_u32(&var, &value)?;
    }
    if let Some((var, value)) = lookup(prefix, "SAMPLING_THEREAFTER") {
        config.sampling.thereafter = parse_u32(&var, &value)?;
    }
    if let Some((var, value)) = lookup(prefix, "ENCODING") {
        config.encoding = parse_token::<Encoding>(&var, &value)?;
    }
    if let Some((var, value)) = lookup(prefix, "OUTPUT_PATHS") {
        config.output_paths = parse_paths(&var, &value)?;
    }
    if let Some((var, value)) = lookup(prefix, "ERROR_OUTPUT_PATHS") {
        config.error_output_paths = parse_paths(&var, &value)?;
    }
    Ok(())
}

fn lookup(prefix: &str, field: &str) -> Option<(String, String)> {
    let var = format!("{prefix}_{field}");
    std::env::var(&var).ok().map(|value| (var, value))
}

fn parse_token<T>(var: &str, value: &str) -> Result<T>
where
    T: FromStr<Err = Error>,
{
    value.parse().map_err(|e: Error| Error::EnvParse {
        var: var.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_bool(var: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(Error::EnvParse {
            var: var.to_string(),
            value: value.to_string(),
            reason: "expected one of 1, 0, true, false".to_string(),
        }),
    }
}

fn parse_u32(var: &str, value: &str) -> Result<u32> {
    value.parse().map_err(|e: std::num::ParseIntError| Error::EnvParse {
        var: var.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_paths(var: &str, value: &str) -> Result<Vec<String>> {
    let paths: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    if paths.is_empty() {
        return Err(Error::EnvParse {
            var: var.to_string(),
            value: value.to_string(),
            reason: "must name at least one destination".to_string(),
        });
    }
    Ok(paths)
}
