use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Latest rates as returned by the dashboard's exchange-rate endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateResponse {
    pub base: String,
    pub rates: IndexMap<String, f64>,
}

/// Error body returned by the endpoint on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRateErrorBody {
    pub error: String,
}

impl ExchangeRateResponse {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        if let Ok(body) = serde_json::from_str::<ExchangeRateErrorBody>(input) {
            return Err(ChartError::RateSource(body.error));
        }
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse exchange rate payload: {e}"))
        })
    }

    #[must_use]
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }
}

#[cfg(feature = "rates-client")]
pub use client::RatesClient;

#[cfg(feature = "rates-client")]
mod client {
    use std::time::Duration;

    use tracing::{debug, warn};

    use super::ExchangeRateResponse;
    use crate::error::{ChartError, ChartResult};

    /// Blocking client for `GET {base_url}/api/exchange-rates?base=XXX`.
    #[derive(Debug, Clone)]
    pub struct RatesClient {
        base_url: String,
        http: reqwest::blocking::Client,
    }

    impl RatesClient {
        pub fn new(base_url: impl Into<String>) -> ChartResult<Self> {
            let http = reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(12))
                .build()
                .map_err(|e| ChartError::RateSource(format!("http client error: {e}")))?;
            Ok(Self {
                base_url: base_url.into().trim_end_matches('/').to_owned(),
                http,
            })
        }

        #[must_use]
        pub fn base_url(&self) -> &str {
            &self.base_url
        }

        pub fn fetch_latest(&self, base_currency: &str) -> ChartResult<ExchangeRateResponse> {
            let url = format!("{}/api/exchange-rates", self.base_url);
            debug!(%url, base = base_currency, "fetching exchange rates");
            let body = self
                .http
                .get(&url)
                .query(&[("base", base_currency)])
                .send()
                .and_then(|response| response.error_for_status())
                .and_then(|response| response.text())
                .map_err(|e| {
                    warn!(error = %e, "exchange rate request failed");
                    ChartError::RateSource(format!("exchange rate request error: {e}"))
                })?;
            ExchangeRateResponse::from_json_str(&body)
        }
    }
}
