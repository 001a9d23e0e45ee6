//! Scanner configuration: the watchlist and fetch-window settings.
//!
//! Two on-disk shapes are accepted:
//! - a TOML file with the full settings (`symbols`, optional `[timeframe]`,
//!   `lookback_days`, `oscillator_length`), and
//! - a plain JSON array of symbol strings, which is merged with the default
//!   settings.
//!
//! Loaders normalize the watchlist before handing it out: symbols are
//! trimmed and uppercased, duplicates are dropped preserving first-occurrence
//! order, and an empty watchlist or empty symbol is an error. Normalization
//! can be re-applied after command-line overrides.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::timeframe::{TimeFrame, TimeFrameError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse TOML config: {0}")]
    ParseToml(#[from] toml::de::Error),

    #[error("failed to parse JSON watchlist: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("watchlist has no symbols")]
    EmptyWatchlist,

    #[error("symbol cannot be empty after trimming")]
    EmptySymbol,

    #[error("lookback_days must be at least 1, got {0}")]
    InvalidLookback(i64),

    #[error(transparent)]
    Timeframe(#[from] TimeFrameError),
}

/// Bar interval as spelled in the config file (amount + unit string).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeframeCfg {
    /// Magnitude component (e.g., 1, 5, 15).
    pub amount: u32,
    /// Unit component (e.g., "minute", "hour", "day", "week", "month").
    pub unit: String,
}

/// The watchlist plus everything needed to build a scan window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Ticker symbols to scan, in scan order.
    pub symbols: Vec<String>,

    /// Bar interval for the fetched history.
    #[serde(default = "default_timeframe")]
    pub timeframe: TimeframeCfg,

    /// How many days of history to request, counted back from the scan end.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: i64,

    /// Oscillator lookback length.
    #[serde(default = "default_oscillator_length")]
    pub oscillator_length: usize,
}

fn default_timeframe() -> TimeframeCfg {
    TimeframeCfg {
        amount: 1,
        unit: "hour".to_string(),
    }
}

fn default_lookback_days() -> i64 {
    5
}

fn default_oscillator_length() -> usize {
    14
}

impl ScannerConfig {
    /// Wraps a bare symbol list with the default settings.
    pub fn from_symbols(symbols: Vec<String>) -> Self {
        Self {
            symbols,
            timeframe: default_timeframe(),
            lookback_days: default_lookback_days(),
            oscillator_length: default_oscillator_length(),
        }
    }

    /// Normalizes the watchlist in place.
    ///
    /// Trims and uppercases every symbol, rejects empties, de-duplicates
    /// preserving first-occurrence order, and validates the lookback.
    /// Idempotent, so callers may re-run it after overriding fields.
    pub fn normalize(&mut self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(self.symbols.len());

        for raw in self.symbols.drain(..) {
            let symbol = raw.trim().to_uppercase();
            if symbol.is_empty() {
                return Err(ConfigError::EmptySymbol);
            }
            if seen.insert(symbol.clone()) {
                normalized.push(symbol);
            }
        }

        if normalized.is_empty() {
            return Err(ConfigError::EmptyWatchlist);
        }
        self.symbols = normalized;

        if self.lookback_days < 1 {
            return Err(ConfigError::InvalidLookback(self.lookback_days));
        }

        Ok(())
    }

    /// Resolves the configured interval into a [`TimeFrame`].
    pub fn timeframe(&self) -> Result<TimeFrame, ConfigError> {
        TimeFrame::parse(self.timeframe.amount, &self.timeframe.unit).map_err(Into::into)
    }
}

/// Parses and normalizes a full config from a TOML string.
pub fn from_toml_str(toml_str: &str) -> Result<ScannerConfig, ConfigError> {
    let mut cfg: ScannerConfig = toml::from_str(toml_str)?;
    cfg.normalize()?;
    Ok(cfg)
}

/// Parses a plain JSON symbol array and merges it with the default settings.
pub fn from_json_str(json_str: &str) -> Result<ScannerConfig, ConfigError> {
    let symbols: Vec<String> = serde_json::from_str(json_str)?;
    let mut cfg = ScannerConfig::from_symbols(symbols);
    cfg.normalize()?;
    Ok(cfg)
}

/// Reads a config file from disk, dispatching on the file extension:
/// `.json` is treated as a bare watchlist, anything else as full TOML.
pub fn load_config_path(path: impl AsRef<Path>) -> Result<ScannerConfig, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    if path.extension().is_some_and(|ext| ext == "json") {
        from_json_str(&text)
    } else {
        from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::models::timeframe::TimeFrameUnit;

    use super::*;

    #[test]
    fn full_toml_config_parses() {
        let cfg = from_toml_str(
            r#"
            symbols = ["AAPL", "MSFT"]
            lookback_days = 10
            oscillator_length = 21

            [timeframe]
            amount = 15
            unit = "minute"
        "#,
        )
        .unwrap();

        assert_eq!(cfg.symbols, vec!["AAPL", "MSFT"]);
        assert_eq!(cfg.lookback_days, 10);
        assert_eq!(cfg.oscillator_length, 21);
        let tf = cfg.timeframe().unwrap();
        assert_eq!(tf.amount, 15);
        assert_eq!(tf.unit, TimeFrameUnit::Minute);
    }

    #[test]
    fn omitted_settings_fall_back_to_defaults() {
        let cfg = from_toml_str(r#"symbols = ["NVDA"]"#).unwrap();
        assert_eq!(cfg.lookback_days, 5);
        assert_eq!(cfg.oscillator_length, 14);
        let tf = cfg.timeframe().unwrap();
        assert_eq!((tf.amount, tf.unit), (1, TimeFrameUnit::Hour));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = from_toml_str(
            r#"
            symbols = ["AAPL"]
            retries = 3
        "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml(_)));
    }

    #[test]
    fn json_watchlist_gets_default_settings() {
        let cfg = from_json_str(r#"["aapl", "msft", "AAPL"]"#).unwrap();
        assert_eq!(cfg.symbols, vec!["AAPL", "MSFT"]);
        assert_eq!(cfg.lookback_days, 5);
    }

    #[test]
    fn normalization_uppercases_trims_and_dedupes() {
        let mut cfg = ScannerConfig::from_symbols(vec![
            " aapl ".to_string(),
            "msft".to_string(),
            "AAPL".to_string(),
        ]);
        cfg.normalize().unwrap();
        assert_eq!(cfg.symbols, vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn empty_watchlist_is_an_error() {
        let err = from_toml_str(r#"symbols = []"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyWatchlist));
    }

    #[test]
    fn blank_symbol_is_an_error() {
        let err = from_json_str(r#"["AAPL", "  "]"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptySymbol));
    }

    #[test]
    fn non_positive_lookback_is_an_error() {
        let err = from_toml_str(
            r#"
            symbols = ["AAPL"]
            lookback_days = 0
        "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLookback(0)));
    }

    #[test]
    fn load_path_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("scanner.toml");
        let mut f = std::fs::File::create(&toml_path).unwrap();
        write!(f, r#"symbols = ["tsla"]"#).unwrap();
        let cfg = load_config_path(&toml_path).unwrap();
        assert_eq!(cfg.symbols, vec!["TSLA"]);

        let json_path = dir.path().join("watchlist.json");
        let mut f = std::fs::File::create(&json_path).unwrap();
        write!(f, r#"["amzn", "goog"]"#).unwrap();
        let cfg = load_config_path(&json_path).unwrap();
        assert_eq!(cfg.symbols, vec!["AMZN", "GOOG"]);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_config_path("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
