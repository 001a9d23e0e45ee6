//! The scan pipeline: fetch history, compute the oscillator, recommend,
//! collect a report.
//!
//! Each symbol's analysis is independent and owns its data exclusively, so a
//! failing symbol never affects another. The reference implementation runs
//! sequentially; nothing here depends on ordering between symbols beyond the
//! final report sort.

use chrono::{DateTime, Duration, Utc};
use snafu::OptionExt;

use crate::{
    analysis::{Recommendation, recommend},
    config::{ConfigError, ScannerConfig},
    indicators::rsi,
    models::{
        request_params::{BarsRequestParams, ProviderParams},
        timeframe::TimeFrame,
    },
    providers::{DataProvider, NoDataSnafu, ProviderError},
};

/// Everything one scan run needs, resolved up front.
///
/// The orchestrator receives the plan explicitly and keeps no state of its
/// own; there is no process-wide symbol list.
#[derive(Debug, Clone)]
pub struct ScanPlan {
    pub symbols: Vec<String>,
    pub timeframe: TimeFrame,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub oscillator_length: usize,
}

impl ScanPlan {
    /// Builds a plan from a normalized config and an explicit end instant,
    /// counting the fetch window back from `end`.
    pub fn from_config(cfg: &ScannerConfig, end: DateTime<Utc>) -> Result<Self, ConfigError> {
        if cfg.lookback_days < 1 {
            return Err(ConfigError::InvalidLookback(cfg.lookback_days));
        }
        Ok(Self {
            symbols: cfg.symbols.clone(),
            timeframe: cfg.timeframe()?,
            start: end - Duration::days(cfg.lookback_days),
            end,
            oscillator_length: cfg.oscillator_length,
        })
    }
}

/// A non-HOLD signal for one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalEntry {
    pub symbol: String,
    pub recommendation: Recommendation,
}

/// A symbol that produced no recommendation, with the reason it was skipped.
#[derive(Debug, Clone)]
pub struct SymbolFailure {
    pub symbol: String,
    pub reason: String,
}

/// Result of one scan over the full watchlist.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Non-HOLD signals, sorted by recommendation label descending
    /// (a lexical sort, stable within equal labels).
    pub signals: Vec<SignalEntry>,
    /// Symbols excluded from the report.
    pub failures: Vec<SymbolFailure>,
}

/// Fetches and analyzes a single symbol.
///
/// A response without the requested symbol, or with an empty bar series, is
/// `NoData` — indistinguishable from any other fetch failure as far as the
/// batch is concerned.
pub async fn scan_symbol(
    provider: &dyn DataProvider,
    plan: &ScanPlan,
    symbol: &str,
) -> Result<Recommendation, ProviderError> {
    let params = BarsRequestParams {
        symbols: vec![symbol.to_string()],
        timeframe: plan.timeframe.clone(),
        start: plan.start,
        end: plan.end,
        provider_specific: ProviderParams::None,
    };

    let series = provider
        .fetch_bars(params)
        .await?
        .into_iter()
        .find(|s| s.symbol == symbol)
        .filter(|s| !s.bars.is_empty())
        .context(NoDataSnafu { symbol })?;

    let oscillator = rsi(&series.closes(), plan.oscillator_length);
    Ok(recommend(&series.bars, &oscillator))
}

/// Scans every symbol in the plan, isolating per-symbol failures.
///
/// Fetch failures are recorded and skipped; the batch always runs to
/// completion. Progress and failures go to stderr so stdout stays free for
/// the report itself.
pub async fn run_scan(provider: &dyn DataProvider, plan: &ScanPlan) -> ScanReport {
    let mut report = ScanReport::default();

    for symbol in &plan.symbols {
        eprintln!("Analyzing {symbol}...");
        match scan_symbol(provider, plan, symbol).await {
            Ok(Recommendation::Hold) => {}
            Ok(recommendation) => report.signals.push(SignalEntry {
                symbol: symbol.clone(),
                recommendation,
            }),
            Err(e) => {
                eprintln!("ERROR: {symbol} - {e}");
                report.failures.push(SymbolFailure {
                    symbol: symbol.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
        .signals
        .sort_by(|a, b| b.recommendation.as_str().cmp(a.recommendation.as_str()));

    report
}
