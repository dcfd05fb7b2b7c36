//! The profitability calculator.
//!
//! [`calculate`] is a pure function from one miner setup plus one market
//! snapshot to a complete [`Estimate`]. It performs no I/O, keeps no
//! state between calls, and never suspends; callers refresh market data
//! separately and pass it in explicitly.
//!
//! Degradation policy: invalid or missing *miner* inputs and missing
//! *network hashrates* reject the whole calculation with an
//! [`InputError`]. Missing *prices* degrade gracefully -- the
//! coin-denominated rewards are always produced, and each fiat figure
//! that depends on an unknown price comes back as `None`.

mod inputs;
mod result;

use std::time::Duration;

pub use inputs::{InputError, MinerConfig, NetworkState, PriceState};
pub use result::{CoinEstimate, Estimate, Payout, Period};

use crate::chain::Coin;

const SECONDS_PER_DAY: f64 = 86_400.0;
const HOURS_PER_DAY: f64 = 24.0;

/// Estimate daily profitability for one miner configuration.
///
/// `prices` should already have any what-if overrides applied (see
/// [`PriceState::with_overrides`]); the calculator does not distinguish
/// live from hypothetical prices.
///
/// The returned estimate is denominated per day; use
/// [`Estimate::over`] for other reporting windows.
pub fn calculate(
    config: &MinerConfig,
    network: &NetworkState,
    prices: &PriceState,
) -> Result<Estimate, InputError> {
    config.validate()?;
    network.validate()?;
    prices.validate()?;

    // Fleet scaling happens in f64: a u64 total rate could overflow for
    // large fleets of large units, all of which pass validation.
    let unit_count = config.unit_count as f64;
    let fee_factor = 1.0 - config.pool_fee_percent / 100.0;

    let estimate_coin = |coin: Coin| -> CoinEstimate {
        // The miner's share of blocks equals its share of the network's
        // hash power, so its reward is that share of daily emission.
        let share = config.hash_rate.fraction_of(network.hashrate(coin)) * unit_count;
        let gross_reward = coin.coins_per_day() * share;
        let net_reward = gross_reward * fee_factor;
        let revenue_usd = prices.price(coin).map(|price| net_reward * price);
        CoinEstimate {
            gross_reward,
            net_reward,
            revenue_usd,
        }
    };

    let ltc = estimate_coin(Coin::Ltc);
    let doge = estimate_coin(Coin::Doge);

    let fleet_kw = config.power_watts * unit_count / 1000.0;
    let power_cost_usd = fleet_kw * HOURS_PER_DAY * config.energy_cost_per_kwh;

    let total_revenue_usd = match (ltc.revenue_usd, doge.revenue_usd) {
        (Some(l), Some(d)) => Some(l + d),
        _ => None,
    };
    let net_profit_usd = total_revenue_usd.map(|revenue| revenue - power_cost_usd);

    let payout = match (total_revenue_usd, prices.price(config.payout_coin)) {
        (Some(revenue), Some(price)) => Some(Payout {
            coin: config.payout_coin,
            amount: revenue / price,
        }),
        _ => None,
    };

    let fleet_hardware_cost = config.hardware_cost_usd * unit_count;
    let break_even = match net_profit_usd {
        Some(profit) if profit > 0.0 && fleet_hardware_cost > 0.0 => {
            // A horizon too long for Duration is economically the same
            // as never paying back: not applicable.
            let days = fleet_hardware_cost / profit;
            Duration::try_from_secs_f64(days * SECONDS_PER_DAY).ok()
        }
        _ => None,
    };

    Ok(Estimate {
        period: Period::Day,
        ltc,
        doge,
        power_cost_usd,
        total_revenue_usd,
        net_profit_usd,
        payout,
        break_even,
    })
}
