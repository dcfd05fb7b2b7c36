//! Market-data collaborators.
//!
//! The calculator never fetches anything itself; these sources supply
//! the [`NetworkState`] and [`PriceState`] it consumes. Each source can
//! independently report unavailability, and a failed leg becomes `None`
//! in the snapshot -- never a default zero, which would be
//! indistinguishable from a real figure downstream.

mod blockchair;
mod coingecko;
pub mod types;

pub use blockchair::BlockchairClient;
pub use coingecko::CoinGeckoClient;

use anyhow::Result;
use async_trait::async_trait;

use crate::chain::Coin;
use crate::estimate::{NetworkState, PriceState};
use crate::tracing::prelude::*;
use crate::types::HashRate;

/// Supplies the current hashrate of one network.
#[async_trait]
pub trait HashrateSource {
    async fn network_hashrate(&self, coin: Coin) -> Result<HashRate>;
}

/// Supplies current spot prices for both coins.
#[async_trait]
pub trait PriceSource {
    async fn spot_prices(&self) -> Result<PriceState>;
}

/// One refresh cycle's worth of market data.
///
/// `None` legs mean that retrieval failed or has not completed;
/// consumers must resolve them to an explicit "unavailable" outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketSnapshot {
    pub network: Option<NetworkState>,
    pub prices: Option<PriceState>,
}

/// Fetch hashrates and prices concurrently.
///
/// The legs are independent: a price-API outage still yields network
/// hashrates, and vice versa. Failures are logged and folded into the
/// snapshot as `None`.
pub async fn fetch_snapshot(
    hashrates: &dyn HashrateSource,
    prices: &dyn PriceSource,
) -> MarketSnapshot {
    let (ltc, doge, quotes) = tokio::join!(
        hashrates.network_hashrate(Coin::Ltc),
        hashrates.network_hashrate(Coin::Doge),
        prices.spot_prices(),
    );

    let network = match (ltc, doge) {
        (Ok(ltc), Ok(doge)) => Some(NetworkState::new(ltc, doge)),
        (ltc, doge) => {
            for (coin, result) in [(Coin::Ltc, &ltc), (Coin::Doge, &doge)] {
                if let Err(e) = result {
                    warn!("{coin} network hashrate unavailable: {e:#}");
                }
            }
            None
        }
    };

    let prices = match quotes {
        Ok(state) => Some(state),
        Err(e) => {
            warn!("spot prices unavailable: {e:#}");
            None
        }
    };

    MarketSnapshot { network, prices }
}
