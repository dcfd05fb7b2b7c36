//! Protocol constants for the merge-mined pair.
//!
//! Block rewards and intervals are consensus parameters, fixed here
//! rather than fetched. They change rarely (Litecoin halves every four
//! years; Dogecoin's reward is fixed) and a stale constant is obvious,
//! unlike a stale hashrate.

use std::time::Duration;

use strum::{Display, EnumString};

use crate::types::HashRate;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// The two coins earned by one scrypt hashing effort.
///
/// Litecoin is the parent chain; Dogecoin accepts Litecoin's proof of
/// work via auxiliary proof of work, so both pay out on the same shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Coin {
    Ltc,
    Doge,
}

/// Per-chain consensus parameters relevant to reward math.
#[derive(Debug, Clone, Copy)]
pub struct ChainParams {
    pub ticker: &'static str,
    /// Coins paid per found block.
    pub block_reward: f64,
    /// Average time between blocks.
    pub block_interval: Duration,
}

impl ChainParams {
    /// Coins the whole network emits per day.
    pub fn coins_per_day(&self) -> f64 {
        let blocks_per_day = SECONDS_PER_DAY / self.block_interval.as_secs_f64();
        self.block_reward * blocks_per_day
    }
}

const LTC_PARAMS: ChainParams = ChainParams {
    ticker: "LTC",
    block_reward: 6.25,
    block_interval: Duration::from_secs(150),
};

const DOGE_PARAMS: ChainParams = ChainParams {
    ticker: "DOGE",
    block_reward: 10_000.0,
    block_interval: Duration::from_secs(60),
};

impl Coin {
    pub const fn params(self) -> &'static ChainParams {
        match self {
            Coin::Ltc => &LTC_PARAMS,
            Coin::Doge => &DOGE_PARAMS,
        }
    }

    pub fn ticker(self) -> &'static str {
        self.params().ticker
    }

    pub fn coins_per_day(self) -> f64 {
        self.params().coins_per_day()
    }

    /// Rough network hashrate to fall back on when no live figure is
    /// available. A point-in-time snapshot; callers should prefer a
    /// [`market`](crate::market) source.
    pub fn fallback_network_hashrate(self) -> HashRate {
        match self {
            Coin::Ltc => HashRate::from_terahashes(3600.0),
            Coin::Doge => HashRate::from_terahashes(3500.0),
        }
    }
}
