//! A collection of time-series bars for a specific symbol and timeframe.

use crate::models::{bar::Bar, timeframe::TimeFrame};

/// The complete price history fetched for a single symbol in one scan.
///
/// Groups a vector of [`Bar`]s with their symbol and [`TimeFrame`], making
/// the data set self-describing. Each series is owned exclusively by the
/// analysis run for its symbol and discarded once a recommendation has been
/// produced.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// The symbol this data represents (e.g., "AAPL").
    pub symbol: String,
    /// The time interval for each bar in the series.
    pub timeframe: TimeFrame,
    /// The collection of OHLCV bars, timestamp ascending.
    pub bars: Vec<Bar>,
}

impl BarSeries {
    /// Closing prices in series order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}
