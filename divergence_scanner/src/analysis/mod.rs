//! Divergence detection and the recommendation policy built on top of it.
//!
//! Both entry points are pure functions over a bar series and its
//! index-aligned oscillator series; nothing in here performs I/O or keeps
//! state between calls, so symbols can be analyzed in any order or in
//! parallel.

pub mod divergence;
pub mod recommendation;

pub use divergence::{Divergence, detect};
pub use recommendation::{Recommendation, recommend};
