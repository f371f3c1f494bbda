//! Engine configuration from the environment.
//!
//! - `MATCH3_ROWS`: board height (default 5)
//! - `MATCH3_COLUMNS`: board width (default 5)
//! - `MATCH3_KINDS`: number of tile kinds (default 3)
//! - `MATCH3_SEED`: random seed (default: fresh entropy)
//!
//! Values that do not parse are errors. Values that parse but are out of range
//! are passed on unchanged; the engine rejects them at construction.

use std::env;
use std::num::ParseIntError;

use crate::types::{DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_TILE_KINDS};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid number: {source}")]
    Invalid {
        var: &'static str,
        value: String,
        source: ParseIntError,
    },
}

/// Board parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub rows: usize,
    pub columns: usize,
    pub kinds: usize,
    /// `None` picks a random seed at construction
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            kinds: DEFAULT_TILE_KINDS,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn new(rows: usize, columns: usize, kinds: usize) -> Self {
        Self {
            rows,
            columns,
            kinds,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Read `MATCH3_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for unset or blank variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            rows: parse_var(&lookup, "MATCH3_ROWS")?.unwrap_or(defaults.rows),
            columns: parse_var(&lookup, "MATCH3_COLUMNS")?.unwrap_or(defaults.columns),
            kinds: parse_var(&lookup, "MATCH3_KINDS")?.unwrap_or(defaults.kinds),
            seed: parse_var(&lookup, "MATCH3_SEED")?,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<T>()
        .map(Some)
        .map_err(|source| ConfigError::Invalid {
            var,
            value: raw.clone(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = EngineConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, EngineConfig::default());
        assert_eq!((cfg.rows, cfg.columns, cfg.kinds), (5, 5, 3));
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn reads_all_variables() {
        let cfg = EngineConfig::from_lookup(lookup(&[
            ("MATCH3_ROWS", "8"),
            ("MATCH3_COLUMNS", " 9 "),
            ("MATCH3_KINDS", "5"),
            ("MATCH3_SEED", "12345"),
        ]))
        .unwrap();
        assert_eq!(cfg, EngineConfig::new(8, 9, 5).with_seed(12345));
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let cfg = EngineConfig::from_lookup(lookup(&[("MATCH3_ROWS", "2")])).unwrap();
        assert_eq!(cfg.rows, 2);
    }

    #[test]
    fn garbage_is_an_error() {
        let err = EngineConfig::from_lookup(lookup(&[("MATCH3_KINDS", "many")])).unwrap_err();
        let ConfigError::Invalid { var, value, .. } = err;
        assert_eq!(var, "MATCH3_KINDS");
        assert_eq!(value, "many");
    }

    #[test]
    fn blank_values_use_defaults() {
        let cfg = EngineConfig::from_lookup(lookup(&[("MATCH3_SEED", "  ")])).unwrap();
        assert_eq!(cfg.seed, None);
    }
}
