//! Calculation output.
//!
//! Every fiat figure that depends on market data is an `Option`:
//! `None` is the first-class "unavailable" state, distinct from a
//! computed zero. No field ever holds NaN or infinity.

use std::time::Duration;

use strum::{Display, EnumString};

use crate::chain::Coin;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Reporting window for flow quantities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Period {
    #[default]
    Day,
    Month,
    Year,
}

impl Period {
    /// Calendar convention: 30-day months, 365-day years.
    pub fn days(self) -> f64 {
        match self {
            Period::Day => 1.0,
            Period::Month => 30.0,
            Period::Year => 365.0,
        }
    }
}

/// Per-coin figures over the estimate's period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinEstimate {
    /// Coins earned before the pool fee.
    pub gross_reward: f64,
    /// Coins earned after the pool fee.
    pub net_reward: f64,
    /// Fiat value of the net reward; `None` when the price is unknown.
    pub revenue_usd: Option<f64>,
}

/// Combined payout expressed in one coin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Payout {
    pub coin: Coin,
    /// Value of both coins' revenue, denominated in `coin`.
    pub amount: f64,
}

/// A complete profitability estimate.
///
/// Flow quantities (rewards, costs, revenue, profit, payout) are
/// denominated per [`period`](Self::period); break-even is an absolute
/// duration and does not scale with the reporting window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub period: Period,
    pub ltc: CoinEstimate,
    pub doge: CoinEstimate,
    pub power_cost_usd: f64,
    /// Sum of both coins' revenue; `None` unless *both* prices are
    /// known. A partial sum would be mislabeled as a total.
    pub total_revenue_usd: Option<f64>,
    /// Total revenue minus power cost; defined iff total revenue is.
    pub net_profit_usd: Option<f64>,
    pub payout: Option<Payout>,
    /// Time for cumulative profit to repay the fleet's hardware cost.
    /// `None` unless hardware cost and net profit are both positive.
    pub break_even: Option<Duration>,
}

impl Estimate {
    pub fn coin(&self, coin: Coin) -> &CoinEstimate {
        match coin {
            Coin::Ltc => &self.ltc,
            Coin::Doge => &self.doge,
        }
    }

    /// Break-even expressed in days, for display.
    pub fn break_even_days(&self) -> Option<f64> {
        self.break_even
            .map(|d| d.as_secs_f64() / SECONDS_PER_DAY)
    }

    /// Re-denominate all flow quantities over `period`.
    pub fn over(self, period: Period) -> Estimate {
        let factor = period.days() / self.period.days();
        let scale_coin = |c: CoinEstimate| CoinEstimate {
            gross_reward: c.gross_reward * factor,
            net_reward: c.net_reward * factor,
            revenue_usd: c.revenue_usd.map(|v| v * factor),
        };
        Estimate {
            period,
            ltc: scale_coin(self.ltc),
            doge: scale_coin(self.doge),
            power_cost_usd: self.power_cost_usd * factor,
            total_revenue_usd: self.total_revenue_usd.map(|v| v * factor),
            net_profit_usd: self.net_profit_usd.map(|v| v * factor),
            payout: self.payout.map(|p| Payout {
                coin: p.coin,
                amount: p.amount * factor,
            }),
            break_even: self.break_even,
        }
    }
}
