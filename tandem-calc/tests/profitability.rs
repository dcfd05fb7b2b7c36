//! End-to-end checks of the public estimate API with realistic miner
//! and market figures.

use tandem_calc::chain::Coin;
use tandem_calc::estimate::{MinerConfig, NetworkState, Period, PriceState, calculate};
use tandem_calc::types::HashRate;

fn antminer_l7() -> MinerConfig {
    MinerConfig {
        hash_rate: HashRate::from_gigahashes(9500.0),
        power_watts: 3425.0,
        unit_count: 1,
        pool_fee_percent: 2.0,
        energy_cost_per_kwh: 0.10,
        hardware_cost_usd: 4500.0,
        payout_coin: Coin::Ltc,
    }
}

fn reference_network() -> NetworkState {
    NetworkState::new(
        HashRate::from_terahashes(3600.0),
        HashRate::from_terahashes(3500.0),
    )
}

#[test]
fn realistic_rig_daily_figures_hang_together() {
    let prices = PriceState::new(Some(65.0), Some(0.12));
    let estimate = calculate(&antminer_l7(), &reference_network(), &prices).unwrap();

    // 9.5 TH of 3600 TH earns 9.5/3600 of 3600 LTC/day = 9.5 gross,
    // 9.31 net of the 2% fee.
    assert!((estimate.ltc.gross_reward - 9.5).abs() < 1e-9);
    assert!((estimate.ltc.net_reward - 9.31).abs() < 1e-9);

    // DOGE network is slightly smaller, so the share is slightly larger.
    let doge_gross = 14_400_000.0 * 9.5 / 3500.0;
    assert!((estimate.doge.gross_reward - doge_gross).abs() < 1e-6);

    // Revenue, profit, payout, and break-even are all mutually
    // consistent.
    let total = estimate.total_revenue_usd.unwrap();
    let expected_total =
        estimate.ltc.revenue_usd.unwrap() + estimate.doge.revenue_usd.unwrap();
    assert!((total - expected_total).abs() < 1e-9);

    let profit = estimate.net_profit_usd.unwrap();
    assert!((profit - (total - estimate.power_cost_usd)).abs() < 1e-9);
    assert!(profit > 0.0);

    let payout = estimate.payout.unwrap();
    assert!((payout.amount * 65.0 - total).abs() < 1e-6);

    let break_even_days = estimate.break_even_days().unwrap();
    assert!((break_even_days - 4500.0 / profit).abs() < 1e-6);
}

#[test]
fn monthly_and_yearly_windows_scale_from_daily() {
    let prices = PriceState::new(Some(65.0), Some(0.12));
    let daily = calculate(&antminer_l7(), &reference_network(), &prices).unwrap();

    let monthly = daily.over(Period::Month);
    assert!((monthly.ltc.net_reward - daily.ltc.net_reward * 30.0).abs() < 1e-9);
    assert!(
        (monthly.net_profit_usd.unwrap() - daily.net_profit_usd.unwrap() * 30.0).abs() < 1e-6
    );

    let yearly = daily.over(Period::Year);
    assert!((yearly.power_cost_usd - daily.power_cost_usd * 365.0).abs() < 1e-6);

    // The payback horizon is a fixed point in time regardless of the
    // reporting window.
    assert_eq!(monthly.break_even, daily.break_even);
    assert_eq!(yearly.break_even, daily.break_even);
}

#[test]
fn submission_before_prices_load_degrades_explicitly() {
    let estimate = calculate(
        &antminer_l7(),
        &reference_network(),
        &PriceState::UNAVAILABLE,
    )
    .unwrap();

    // Coin rewards are still there; every fiat figure is tagged
    // unavailable rather than computed against zero prices.
    assert!(estimate.ltc.net_reward > 0.0);
    assert!(estimate.doge.net_reward > 0.0);
    assert_eq!(estimate.ltc.revenue_usd, None);
    assert_eq!(estimate.total_revenue_usd, None);
    assert_eq!(estimate.net_profit_usd, None);
    assert_eq!(estimate.payout, None);
    assert_eq!(estimate.break_even, None);
    assert!(estimate.power_cost_usd > 0.0);
}

#[test]
fn what_if_prices_change_fiat_but_not_coin_rewards() {
    let live = PriceState::new(Some(65.0), Some(0.12));
    let hypothetical = live.with_overrides(PriceState::new(Some(130.0), None));

    let config = antminer_l7();
    let network = reference_network();
    let actual = calculate(&config, &network, &live).unwrap();
    let what_if = calculate(&config, &network, &hypothetical).unwrap();

    assert_eq!(what_if.ltc.net_reward, actual.ltc.net_reward);
    assert_eq!(what_if.doge.net_reward, actual.doge.net_reward);
    assert!(
        (what_if.ltc.revenue_usd.unwrap() - actual.ltc.revenue_usd.unwrap() * 2.0).abs()
            < 1e-9
    );
    assert_eq!(what_if.doge.revenue_usd, actual.doge.revenue_usd);
}
