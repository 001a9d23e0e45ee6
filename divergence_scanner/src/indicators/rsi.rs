/// Relative Strength Index over closing prices (Wilder's smoothing).
///
/// Returns one entry per input price. Entries before index `length - 1` are
/// `None`; from there on each entry is `Some(rsi)` in `[0, 100]`. A series
/// shorter than `length` samples therefore comes back entirely undefined,
/// as does any call with `length < 2`.
///
/// Average gains/losses are simple-averaged while the lookback warms up and
/// recursively smoothed (`(avg * (n - 1) + x) / n`) once `length` changes
/// have been seen. When the average loss is zero the index pegs at 100.
pub fn rsi(closes: &[f64], length: usize) -> Vec<Option<f64>> {
    let n = closes.len();
    let mut out = vec![None; n];
    if length < 2 || n < length {
        return out;
    }

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;

    for i in 1..n {
        let change = closes[i] - closes[i - 1];
        let (gain, loss) = if change >= 0.0 {
            (change, 0.0)
        } else {
            (0.0, -change)
        };

        if i < length {
            // Warm-up: running simple average over the changes seen so far.
            let k = i as f64;
            avg_gain = (avg_gain * (k - 1.0) + gain) / k;
            avg_loss = (avg_loss * (k - 1.0) + loss) / k;
        } else {
            let p = length as f64;
            avg_gain = (avg_gain * (p - 1.0) + gain) / p;
            avg_loss = (avg_loss * (p - 1.0) + loss) / p;
        }

        if i >= length - 1 {
            out[i] = Some(if avg_loss == 0.0 {
                100.0
            } else {
                let rs = avg_gain / avg_loss;
                100.0 - 100.0 / (1.0 + rs)
            });
        }
    }

    out
}
