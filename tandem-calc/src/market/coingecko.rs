//! Spot prices from the CoinGecko API.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client as HttpClient;

use super::PriceSource;
use super::types::SimplePriceResponse;
use crate::estimate::PriceState;

const DEFAULT_BASE_URL: &str = "https://api.coingecko.com";

/// Price source backed by `api.coingecko.com`.
pub struct CoinGeckoClient {
    http: HttpClient,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Point at a non-default base URL, e.g. a local stub in tests.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http: HttpClient::new(),
            base_url,
        }
    }
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceSource for CoinGeckoClient {
    async fn spot_prices(&self) -> Result<PriceState> {
        let url = format!(
            "{}/api/v3/simple/price?ids=litecoin,dogecoin&vs_currencies=usd",
            self.base_url
        );
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("failed to reach CoinGecko")?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("CoinGecko price request failed: {status}");
        }
        let quotes: SimplePriceResponse = response
            .json()
            .await
            .context("failed to parse CoinGecko price response")?;

        // A missing or non-positive quote degrades that coin to
        // "price unavailable" rather than failing the whole fetch.
        let usable = |quote: Option<super::types::UsdQuote>| {
            quote
                .and_then(|q| q.usd)
                .filter(|p| p.is_finite() && *p > 0.0)
        };
        Ok(PriceState::new(
            usable(quotes.litecoin),
            usable(quotes.dogecoin),
        ))
    }
}
