//! Pure computation module for technical indicators.
//!
//! No I/O, no side effects: closing-price slices in, indicator values out.
//! Every indicator returns a vector index-aligned with its input, using
//! `None` for positions where the lookback has not yet accumulated enough
//! history.

pub mod rsi;

pub use rsi::rsi;
