use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::{
    models::{
        request_params::{BarsRequestParams, ProviderParams},
        timeframe::{TimeFrame, TimeFrameUnit},
    },
    providers::{ProviderError, ValidationSnafu},
};

/// Specifies the corporate action adjustment for stock data.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Adjustment {
    #[default]
    Raw,
    Split,
    Dividend,
    All,
}

/// Specifies the source feed for stock data.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Feed {
    #[default]
    Sip,
    Iex,
    Otc,
}

/// Specifies the sort order for the bars.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sort {
    #[default]
    Asc,
    Desc,
}

/// Alpaca-specific parameters for a bars request.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct AlpacaBarsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<Adjustment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed: Option<Feed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
}

impl Adjustment {
    fn as_query(&self) -> &'static str {
        match self {
            Adjustment::Raw => "raw",
            Adjustment::Split => "split",
            Adjustment::Dividend => "dividend",
            Adjustment::All => "all",
        }
    }
}

impl Feed {
    fn as_query(&self) -> &'static str {
        match self {
            Feed::Sip => "sip",
            Feed::Iex => "iex",
            Feed::Otc => "otc",
        }
    }
}

impl Sort {
    fn as_query(&self) -> &'static str {
        match self {
            Sort::Asc => "asc",
            Sort::Desc => "desc",
        }
    }
}

/// Renders a timeframe in Alpaca's wire format (e.g. "15Min", "1Hour").
fn timeframe_str(tf: &TimeFrame) -> String {
    let unit = match tf.unit {
        TimeFrameUnit::Minute => "Min",
        TimeFrameUnit::Hour => "Hour",
        TimeFrameUnit::Day => "Day",
        TimeFrameUnit::Week => "Week",
        TimeFrameUnit::Month => "Month",
    };
    format!("{}{}", tf.amount, unit)
}

/// Checks a timeframe against the combinations the bars endpoint accepts:
/// 1-59 Minute, 1-23 Hour, 1 Day, 1 Week, and 1/2/3/6/12 Month.
pub fn validate_timeframe(tf: &TimeFrame) -> Result<(), ProviderError> {
    let accepted = match tf.unit {
        TimeFrameUnit::Minute => (1..=59).contains(&tf.amount),
        TimeFrameUnit::Hour => (1..=23).contains(&tf.amount),
        TimeFrameUnit::Day | TimeFrameUnit::Week => tf.amount == 1,
        TimeFrameUnit::Month => [1, 2, 3, 6, 12].contains(&tf.amount),
    };
    ensure!(
        accepted,
        ValidationSnafu {
            message: format!(
                "timeframe {} is not supported by the bars endpoint",
                timeframe_str(tf)
            ),
        }
    );
    Ok(())
}

/// Builds the query string for one bars request (without the page token).
pub fn construct_params(params: &BarsRequestParams) -> Vec<(String, String)> {
    let mut query = vec![
        ("symbols".to_string(), params.symbols.join(",")),
        ("timeframe".to_string(), timeframe_str(&params.timeframe)),
        ("start".to_string(), params.start.to_rfc3339()),
        ("end".to_string(), params.end.to_rfc3339()),
    ];

    if let ProviderParams::Alpaca(extra) = &params.provider_specific {
        if let Some(adjustment) = &extra.adjustment {
            query.push(("adjustment".to_string(), adjustment.as_query().to_string()));
        }
        if let Some(feed) = &extra.feed {
            query.push(("feed".to_string(), feed.as_query().to_string()));
        }
        if let Some(currency) = &extra.currency {
            query.push(("currency".to_string(), currency.clone()));
        }
        if let Some(limit) = extra.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(sort) = &extra.sort {
            query.push(("sort".to_string(), sort.as_query().to_string()));
        }
    }

    query
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn request(timeframe: TimeFrame, provider_specific: ProviderParams) -> BarsRequestParams {
        BarsRequestParams {
            symbols: vec!["AAPL".to_string(), "MSFT".to_string()],
            timeframe,
            start: Utc.with_ymd_and_hms(2025, 1, 1, 9, 30, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 1, 6, 16, 0, 0).unwrap(),
            provider_specific,
        }
    }

    #[test]
    fn base_query_has_symbols_timeframe_and_window() {
        let query = construct_params(&request(TimeFrame::hours(1), ProviderParams::None));
        assert!(query.contains(&("symbols".to_string(), "AAPL,MSFT".to_string())));
        assert!(query.contains(&("timeframe".to_string(), "1Hour".to_string())));
        assert!(query.iter().any(|(k, v)| k == "start" && v.starts_with("2025-01-01T09:30:00")));
        assert!(query.iter().any(|(k, v)| k == "end" && v.starts_with("2025-01-06T16:00:00")));
    }

    #[test]
    fn alpaca_specific_knobs_are_appended() {
        let extra = AlpacaBarsParams {
            adjustment: Some(Adjustment::Split),
            feed: Some(Feed::Iex),
            limit: Some(500),
            sort: Some(Sort::Desc),
            ..Default::default()
        };
        let query = construct_params(&request(TimeFrame::minutes(15), ProviderParams::Alpaca(extra)));
        assert!(query.contains(&("timeframe".to_string(), "15Min".to_string())));
        assert!(query.contains(&("adjustment".to_string(), "split".to_string())));
        assert!(query.contains(&("feed".to_string(), "iex".to_string())));
        assert!(query.contains(&("limit".to_string(), "500".to_string())));
        assert!(query.contains(&("sort".to_string(), "desc".to_string())));
    }

    #[test]
    fn timeframe_validation_follows_endpoint_rules() {
        assert!(validate_timeframe(&TimeFrame::hours(1)).is_ok());
        assert!(validate_timeframe(&TimeFrame::minutes(59)).is_ok());
        assert!(validate_timeframe(&TimeFrame::months(6)).is_ok());

        assert!(validate_timeframe(&TimeFrame::minutes(60)).is_err());
        assert!(validate_timeframe(&TimeFrame::hours(24)).is_err());
        assert!(validate_timeframe(&TimeFrame::new(2, TimeFrameUnit::Day)).is_err());
        assert!(validate_timeframe(&TimeFrame::months(5)).is_err());
    }
}
