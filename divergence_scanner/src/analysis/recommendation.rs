use std::fmt;

use crate::{analysis::divergence, models::bar::Bar};

/// Directional recommendation for one symbol, recomputed fresh per scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Buy => "BUY",
            Recommendation::Sell => "SELL",
            Recommendation::Hold => "HOLD",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applies the recommendation policy over a bar series and its oscillator.
///
/// An oscillator with no defined value anywhere (the lookback never
/// accumulated enough history, or the series is empty) is HOLD regardless of
/// price shape. Otherwise the last-two-sample divergence decides: bullish
/// maps to BUY, bearish to SELL, neither to HOLD. Bullish is checked first,
/// so BUY wins if a pairing ever produced both flags at once.
pub fn recommend(bars: &[Bar], oscillator: &[Option<f64>]) -> Recommendation {
    if oscillator.iter().all(Option::is_none) {
        return Recommendation::Hold;
    }

    let d = divergence::detect(bars, oscillator);
    if d.bullish {
        Recommendation::Buy
    } else if d.bearish {
        Recommendation::Sell
    } else {
        Recommendation::Hold
    }
}
