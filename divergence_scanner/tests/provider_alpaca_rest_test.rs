#![cfg(test)]
use chrono::{Duration, Utc};
use divergence_scanner::{
    models::{
        request_params::{BarsRequestParams, ProviderParams},
        timeframe::TimeFrame,
    },
    providers::{
        DataProvider,
        alpaca_rest::{AlpacaBarsParams, AlpacaProvider, Sort},
    },
};
use serial_test::serial;

#[tokio::test]
#[serial]
#[ignore]
async fn alpaca_provider_fetches_real_bars() {
    // Requires APCA_API_KEY_ID and APCA_API_SECRET_KEY, from the environment
    // or a local .env file.
    dotenvy::dotenv().ok();
    if std::env::var("APCA_API_KEY_ID").is_err() || std::env::var("APCA_API_SECRET_KEY").is_err() {
        println!("Skipping alpaca_provider_fetches_real_bars: API keys not set.");
        return;
    }

    let provider = AlpacaProvider::new().expect("Failed to create AlpacaProvider");

    let params = BarsRequestParams {
        symbols: vec!["AAPL".to_string()],
        timeframe: TimeFrame::day(),
        start: Utc::now() - Duration::days(10),
        end: Utc::now() - Duration::days(1),
        provider_specific: ProviderParams::Alpaca(AlpacaBarsParams {
            sort: Some(Sort::Asc),
            limit: Some(5),
            ..Default::default()
        }),
    };

    let result = provider.fetch_bars(params).await;
    assert!(result.is_ok(), "fetch_bars returned an error: {:?}", result.err());

    let series_vec = result.unwrap();
    assert_eq!(series_vec.len(), 1, "Expected 1 BarSeries for AAPL");

    let aapl = &series_vec[0];
    assert_eq!(aapl.symbol, "AAPL");
    assert!(!aapl.bars.is_empty(), "Expected at least one bar for AAPL");
    assert!(aapl.bars.len() <= 5, "Expected at most 5 bars due to limit");

    // Ascending sort means timestamps must increase.
    if aapl.bars.len() > 1 {
        assert!(aapl.bars[0].timestamp < aapl.bars[1].timestamp);
    }
}
