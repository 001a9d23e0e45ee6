use crate::models::bar::Bar;

/// Outcome of comparing the two most recent bars against the oscillator.
///
/// Both flags false is the common case. The comparison rules make the two
/// flags mutually exclusive in practice, but nothing enforces that
/// structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Divergence {
    pub bullish: bool,
    pub bearish: bool,
}

/// Classifies price/oscillator divergence over the last two samples.
///
/// `oscillator` must be index-aligned with `bars` (same length, entry `i`
/// computed from bars up to `i`).
///
/// Fewer than two bars, or an undefined oscillator value at either of the
/// two comparison points, yields no divergence — insufficient history is a
/// defined signal, not an error.
///
/// Bullish: the last bar prints a lower low while the oscillator prints a
/// higher low. Bearish: a higher high while the oscillator prints a lower
/// high. All comparisons are strict, so ties never count.
///
/// This is a two-point instantaneous check. A full technical-analysis
/// divergence spans swing extrema over a wider window; the narrower rule
/// here is intentional.
pub fn detect(bars: &[Bar], oscillator: &[Option<f64>]) -> Divergence {
    debug_assert_eq!(bars.len(), oscillator.len());

    let n = bars.len();
    if n < 2 {
        return Divergence::default();
    }

    let (prev, last) = (&bars[n - 2], &bars[n - 1]);
    let (Some(osc_prev), Some(osc_last)) = (
        oscillator.get(n - 2).copied().flatten(),
        oscillator.get(n - 1).copied().flatten(),
    ) else {
        return Divergence::default();
    };

    Divergence {
        bullish: last.low < prev.low && osc_last > osc_prev,
        bearish: last.high > prev.high && osc_last < osc_prev,
    }
}
