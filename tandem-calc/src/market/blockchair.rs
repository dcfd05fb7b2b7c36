//! Network hashrate from the Blockchair API.
//!
//! Blockchair publishes per-chain statistics, so Litecoin and Dogecoin
//! hashrates are fetched independently rather than assumed equal.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client as HttpClient;

use super::HashrateSource;
use super::types::BlockchairStats;
use crate::chain::Coin;
use crate::types::HashRate;

const DEFAULT_BASE_URL: &str = "https://api.blockchair.com";

/// Hashrate source backed by `api.blockchair.com`.
pub struct BlockchairClient {
    http: HttpClient,
    base_url: String,
}

impl BlockchairClient {
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

    fn chain_slug(coin: Coin) -> &'static str {
        match coin {
            Coin::Ltc => "litecoin",
            Coin::Doge => "dogecoin",
        }
    }
}

impl Default for BlockchairClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HashrateSource for BlockchairClient {
    async fn network_hashrate(&self, coin: Coin) -> Result<HashRate> {
        let url = format!("{}/{}/stats", self.base_url, Self::chain_slug(coin));
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("failed to reach Blockchair for {coin}"))?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Blockchair {coin} stats request failed: {status}");
        }
        let stats: BlockchairStats = response
            .json()
            .await
            .with_context(|| format!("failed to parse Blockchair {coin} stats"))?;

        let hashes_per_second: f64 = stats
            .data
            .hashrate_24h
            .parse()
            .with_context(|| format!("unparseable {coin} hashrate: {:?}", stats.data.hashrate_24h))?;
        if !hashes_per_second.is_finite() || hashes_per_second <= 0.0 {
            anyhow::bail!("Blockchair reported non-positive {coin} hashrate");
        }
        Ok(HashRate::from_hashes(hashes_per_second as u64))
    }
}
