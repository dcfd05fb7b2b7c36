//! Calculator inputs and their validation.
//!
//! Validation runs before any arithmetic so degenerate inputs are
//! rejected as structured errors instead of surfacing later as NaN or
//! infinity in derived figures.

use thiserror::Error;

use crate::chain::Coin;
use crate::types::HashRate;

/// Why a calculation was rejected before running.
///
/// Missing market *prices* are not in this enum: an unknown price
/// degrades the affected fiat figures to "unavailable" rather than
/// rejecting the whole calculation. Network hashrates are different --
/// without them no reward can be computed at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("miner hash rate is required and must be positive")]
    MissingHashRate,

    #[error("power draw is required and must be positive")]
    MissingPowerDraw,

    #[error("unit count must be at least 1")]
    ZeroUnitCount,

    #[error("pool fee {0}% is outside the valid range 0-100%")]
    PoolFeeOutOfRange(f64),

    #[error("energy cost must not be negative (got {0})")]
    NegativeEnergyCost(f64),

    #[error("hardware cost must not be negative (got {0})")]
    NegativeHardwareCost(f64),

    #[error("{0} network hashrate is required and must be positive")]
    MissingNetworkHashrate(Coin),

    #[error("{0} price must be positive (got {1})")]
    InvalidPrice(Coin, f64),

    #[error("{0} is not a finite number")]
    NotFinite(&'static str),
}

/// One miner setup, as submitted by the caller.
///
/// `hash_rate` and `power_watts` describe a single unit; `unit_count`
/// scales the whole fleet. All fiat amounts are USD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinerConfig {
    pub hash_rate: HashRate,
    pub power_watts: f64,
    pub unit_count: u32,
    pub pool_fee_percent: f64,
    pub energy_cost_per_kwh: f64,
    /// Acquisition cost per unit. Zero disables break-even reporting.
    pub hardware_cost_usd: f64,
    /// Coin in which to express the combined payout.
    pub payout_coin: Coin,
}

impl MinerConfig {
    pub(super) fn validate(&self) -> Result<(), InputError> {
        if self.hash_rate.is_zero() {
            return Err(InputError::MissingHashRate);
        }
        require_finite(self.power_watts, "power draw")?;
        if self.power_watts <= 0.0 {
            return Err(InputError::MissingPowerDraw);
        }
        if self.unit_count == 0 {
            return Err(InputError::ZeroUnitCount);
        }
        require_finite(self.pool_fee_percent, "pool fee")?;
        if !(0.0..=100.0).contains(&self.pool_fee_percent) {
            return Err(InputError::PoolFeeOutOfRange(self.pool_fee_percent));
        }
        require_finite(self.energy_cost_per_kwh, "energy cost")?;
        if self.energy_cost_per_kwh < 0.0 {
            return Err(InputError::NegativeEnergyCost(self.energy_cost_per_kwh));
        }
        require_finite(self.hardware_cost_usd, "hardware cost")?;
        if self.hardware_cost_usd < 0.0 {
            return Err(InputError::NegativeHardwareCost(self.hardware_cost_usd));
        }
        Ok(())
    }
}

/// Current hashrate of each network.
///
/// Both chains are mined by the same scrypt fleet, but whether the two
/// figures are measured independently or assumed equal is the data
/// source's policy, not the calculator's. Sources with only a combined
/// figure use [`NetworkState::merged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkState {
    pub ltc_hashrate: HashRate,
    pub doge_hashrate: HashRate,
}

impl NetworkState {
    pub fn new(ltc_hashrate: HashRate, doge_hashrate: HashRate) -> Self {
        Self {
            ltc_hashrate,
            doge_hashrate,
        }
    }

    /// Treat the secondary chain's hashrate as equal to the primary's,
    /// the usual assumption when only a combined figure is published.
    pub fn merged(primary: HashRate) -> Self {
        Self {
            ltc_hashrate: primary,
            doge_hashrate: primary,
        }
    }

    pub fn hashrate(&self, coin: Coin) -> HashRate {
        match coin {
            Coin::Ltc => self.ltc_hashrate,
            Coin::Doge => self.doge_hashrate,
        }
    }

    pub(super) fn validate(&self) -> Result<(), InputError> {
        for coin in [Coin::Ltc, Coin::Doge] {
            if self.hashrate(coin).is_zero() {
                return Err(InputError::MissingNetworkHashrate(coin));
            }
        }
        Ok(())
    }
}

/// Spot prices, USD per coin. `None` means not loaded or unavailable.
///
/// An absent price must never collapse to zero: zero would silently
/// erase revenue while power cost keeps accruing, producing a plausible
/// but wrong loss figure.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceState {
    pub ltc_usd: Option<f64>,
    pub doge_usd: Option<f64>,
}

impl PriceState {
    /// Both prices unknown, e.g. before the first fetch completes.
    pub const UNAVAILABLE: Self = Self {
        ltc_usd: None,
        doge_usd: None,
    };

    pub fn new(ltc_usd: Option<f64>, doge_usd: Option<f64>) -> Self {
        Self { ltc_usd, doge_usd }
    }

    pub fn price(&self, coin: Coin) -> Option<f64> {
        match coin {
            Coin::Ltc => self.ltc_usd,
            Coin::Doge => self.doge_usd,
        }
    }

    /// Apply what-if overrides on top of live prices, field by field.
    ///
    /// Overrides take precedence for every fiat-denominated figure; they
    /// never affect coin-denominated rewards.
    pub fn with_overrides(self, overrides: PriceState) -> PriceState {
        PriceState {
            ltc_usd: overrides.ltc_usd.or(self.ltc_usd),
            doge_usd: overrides.doge_usd.or(self.doge_usd),
        }
    }

    pub(super) fn validate(&self) -> Result<(), InputError> {
        for coin in [Coin::Ltc, Coin::Doge] {
            if let Some(price) = self.price(coin) {
                if !price.is_finite() || price <= 0.0 {
                    return Err(InputError::InvalidPrice(coin, price));
                }
            }
        }
        Ok(())
    }
}

fn require_finite(value: f64, field: &'static str) -> Result<(), InputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputError::NotFinite(field))
    }
}
