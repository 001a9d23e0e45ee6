use async_trait::async_trait;
use indexmap::IndexMap;
use reqwest::{Client, header};
use secrecy::{ExposeSecret, SecretString};
use shared_utils::env::get_env_var;
use snafu::ResultExt;

use crate::{
    models::{bar_series::BarSeries, request_params::BarsRequestParams},
    providers::{
        ApiSnafu, ClientBuildSnafu, DataProvider, InvalidApiKeySnafu, MissingEnvVarSnafu,
        ProviderError, ProviderInitError, ReqwestSnafu,
        alpaca_rest::{
            params::{construct_params, validate_timeframe},
            response::{AlpacaBar, AlpacaResponse},
        },
    },
};

const BASE_URL: &str = "https://data.alpaca.markets/v2/stocks/bars";

pub struct AlpacaProvider {
    client: Client,
}

impl AlpacaProvider {
    /// Creates a new Alpaca provider.
    ///
    /// Reads API keys from the `APCA_API_KEY_ID` and `APCA_API_SECRET_KEY`
    /// environment variables; the keys live only in the client's default
    /// headers.
    pub fn new() -> Result<Self, ProviderInitError> {
        let api_key = SecretString::new(get_env_var("APCA_API_KEY_ID").context(MissingEnvVarSnafu)?.into());
        let secret_key =
            SecretString::new(get_env_var("APCA_API_SECRET_KEY").context(MissingEnvVarSnafu)?.into());

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "APCA-API-KEY-ID",
            header::HeaderValue::from_str(api_key.expose_secret()).context(InvalidApiKeySnafu)?,
        );
        headers.insert(
            "APCA-API-SECRET-KEY",
            header::HeaderValue::from_str(secret_key.expose_secret())
                .context(InvalidApiKeySnafu)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self { client })
    }

    async fn fetch_page(
        &self,
        params: &BarsRequestParams,
        page_token: Option<&str>,
    ) -> Result<AlpacaResponse, ProviderError> {
        let mut query = construct_params(params);
        if let Some(token) = page_token {
            query.push(("page_token".to_string(), token.to_string()));
        }

        let response = self
            .client
            .get(BASE_URL)
            .query(&query)
            .send()
            .await
            .context(ReqwestSnafu)?;

        if !response.status().is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return ApiSnafu { message }.fail();
        }

        response.json::<AlpacaResponse>().await.context(ReqwestSnafu)
    }
}

#[async_trait]
impl DataProvider for AlpacaProvider {
    async fn fetch_bars(&self, params: BarsRequestParams) -> Result<Vec<BarSeries>, ProviderError> {
        validate_timeframe(&params.timeframe)?;

        // Pages are merged per symbol, preserving the order symbols first
        // appear in the response.
        let mut merged: IndexMap<String, Vec<AlpacaBar>> = IndexMap::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.fetch_page(&params, page_token.as_deref()).await?;

            for (symbol, bars) in page.bars {
                merged.entry(symbol).or_default().extend(bars);
            }

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(merged
            .into_iter()
            .map(|(symbol, alpaca_bars)| BarSeries {
                symbol,
                timeframe: params.timeframe.clone(),
                bars: alpaca_bars.into_iter().map(Into::into).collect(),
            })
            .collect())
    }
}
