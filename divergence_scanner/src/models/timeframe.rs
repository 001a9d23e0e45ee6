use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeFrameError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

/// Unit component of a bar interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFrameUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

/// Universal representation of a bar interval (amount and unit).
///
/// Construction is non-validating: providers differ in which combinations
/// their APIs accept, so each [`DataProvider`](crate::providers::DataProvider)
/// implementation validates against its own rules at request time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeFrame {
    pub amount: u32,
    pub unit: TimeFrameUnit,
}

impl TimeFrame {
    pub fn new(amount: u32, unit: TimeFrameUnit) -> Self {
        Self { amount, unit }
    }

    /// Parses a unit spelled as a string (e.g. from a config file or CLI).
    ///
    /// Accepts the common spellings: "m"/"min"/"minute", "h"/"hr"/"hour",
    /// "d"/"day", "w"/"wk"/"week", "mo"/"month".
    pub fn parse(amount: u32, unit: &str) -> Result<Self, TimeFrameError> {
        let unit = match unit.trim().to_lowercase().as_str() {
            "m" | "min" | "minute" => TimeFrameUnit::Minute,
            "h" | "hr" | "hour" => TimeFrameUnit::Hour,
            "d" | "day" => TimeFrameUnit::Day,
            "w" | "wk" | "week" => TimeFrameUnit::Week,
            "mo" | "month" => TimeFrameUnit::Month,
            other => {
                return Err(TimeFrameError::InvalidInput {
                    message: format!("Invalid timeframe unit: {other}"),
                });
            }
        };
        Ok(Self::new(amount, unit))
    }

    // Helper constructors
    pub fn minutes(amount: u32) -> Self {
        Self::new(amount, TimeFrameUnit::Minute)
    }

    pub fn hours(amount: u32) -> Self {
        Self::new(amount, TimeFrameUnit::Hour)
    }

    pub fn day() -> Self {
        Self::new(1, TimeFrameUnit::Day)
    }

    pub fn week() -> Self {
        Self::new(1, TimeFrameUnit::Week)
    }

    pub fn months(amount: u32) -> Self {
        Self::new(amount, TimeFrameUnit::Month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_common_spellings() {
        let tf = TimeFrame::parse(5, "m").unwrap();
        assert_eq!(
            tf,
            TimeFrame {
                amount: 5,
                unit: TimeFrameUnit::Minute
            }
        );

        let tf = TimeFrame::parse(1, "Hour").unwrap();
        assert_eq!(tf, TimeFrame::hours(1));

        let tf = TimeFrame::parse(1, " d ").unwrap();
        assert_eq!(tf, TimeFrame::day());

        let tf = TimeFrame::parse(3, "mo").unwrap();
        assert_eq!(tf, TimeFrame::months(3));
    }

    #[test]
    fn parse_rejects_unknown_units() {
        let err = TimeFrame::parse(5, "fortnight").unwrap_err();
        assert!(err.to_string().contains("fortnight"));
    }
}
