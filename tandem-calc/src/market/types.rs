//! Wire types for the public market-data APIs.
//!
//! These mirror only the fields we read; both providers return much
//! larger documents.

use serde::Deserialize;

/// Envelope of a Blockchair `/{chain}/stats` response.
#[derive(Debug, Deserialize)]
pub struct BlockchairStats {
    pub data: BlockchairStatsData,
}

/// The subset of Blockchair chain stats we use.
#[derive(Debug, Deserialize)]
pub struct BlockchairStatsData {
    /// 24-hour average network hashrate, hashes per second. Blockchair
    /// serializes this as a decimal string.
    pub hashrate_24h: String,
}

/// CoinGecko `/simple/price?ids=litecoin,dogecoin&vs_currencies=usd`
/// response. A delisted or mistyped id is simply absent from the map,
/// so both legs are optional.
#[derive(Debug, Deserialize)]
pub struct SimplePriceResponse {
    pub litecoin: Option<UsdQuote>,
    pub dogecoin: Option<UsdQuote>,
}

/// One coin's quote in the requested vs_currencies.
#[derive(Debug, Deserialize)]
pub struct UsdQuote {
    pub usd: Option<f64>,
}
