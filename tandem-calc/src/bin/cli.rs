//! Command-line interface for tandem-calc.
//!
//! Fetches live market data (unless told otherwise), runs one
//! profitability estimate, and prints the report. Unavailable figures
//! print as "n/a" -- an unknown price is not a zero price.

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result, bail};

use tandem_calc::chain::Coin;
use tandem_calc::estimate::{
    Estimate, MinerConfig, NetworkState, Period, PriceState, calculate,
};
use tandem_calc::market::{self, BlockchairClient, CoinGeckoClient};
use tandem_calc::tracing::prelude::*;
use tandem_calc::types::HashRate;

#[tokio::main]
async fn main() -> Result<()> {
    tandem_calc::tracing::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "estimate" => cmd_estimate(&args[2..]).await?,
        "market" => cmd_market().await?,
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            eprintln!("Run without arguments to see usage.");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_usage() {
    eprintln!("Usage: tandem-cli <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  estimate    Estimate profitability for one miner setup");
    eprintln!("  market      Show current network hashrates and prices");
    eprintln!();
    eprintln!("Estimate options:");
    eprintln!("  --hash-rate <GH/s>       Miner hash rate per unit (required)");
    eprintln!("  --power <W>              Power draw per unit (required)");
    eprintln!("  --units <N>              Number of identical units (default 1)");
    eprintln!("  --fee <percent>          Pool fee (default 0)");
    eprintln!("  --energy-cost <USD/kWh>  Electricity price (default 0)");
    eprintln!("  --hardware-cost <USD>    Cost per unit, enables break-even");
    eprintln!("  --payout <ltc|doge>      Combined payout coin (default ltc)");
    eprintln!("  --period <day|month|year>  Reporting window (default day)");
    eprintln!("  --ltc-price <USD>        What-if LTC price override");
    eprintln!("  --doge-price <USD>       What-if DOGE price override");
    eprintln!("  --ltc-hashrate <TH/s>    LTC network hashrate override");
    eprintln!("  --doge-hashrate <TH/s>   DOGE network hashrate override");
    eprintln!("  --offline                Skip live fetch, use built-in");
    eprintln!("                           network figures and overrides only");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TANDEM_HASHRATE_API_URL  Blockchair base URL override");
    eprintln!("  TANDEM_PRICE_API_URL     CoinGecko base URL override");
}

/// Everything the estimate subcommand accepts, parsed but not fetched.
#[derive(Debug, PartialEq)]
struct EstimateArgs {
    miner: MinerConfig,
    price_overrides: PriceState,
    ltc_network: Option<HashRate>,
    doge_network: Option<HashRate>,
    offline: bool,
    period: Period,
}

fn parse_estimate_args(args: &[String]) -> Result<EstimateArgs> {
    let mut hash_rate = None;
    let mut power = None;
    let mut units = 1u32;
    let mut fee = 0.0;
    let mut energy_cost = 0.0;
    let mut hardware_cost = 0.0;
    let mut payout = Coin::Ltc;
    let mut period = Period::Day;
    let mut ltc_price = None;
    let mut doge_price = None;
    let mut ltc_network = None;
    let mut doge_network = None;
    let mut offline = false;

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        if flag == "--offline" {
            offline = true;
            continue;
        }
        let value = iter
            .next()
            .with_context(|| format!("{flag} requires a value"))?;
        match flag.as_str() {
            "--hash-rate" => hash_rate = Some(HashRate::from_gigahashes(parse_num(flag, value)?)),
            "--power" => power = Some(parse_num(flag, value)?),
            "--units" => {
                units = value
                    .parse()
                    .with_context(|| format!("invalid value for --units: {value}"))?
            }
            "--fee" => fee = parse_num(flag, value)?,
            "--energy-cost" => energy_cost = parse_num(flag, value)?,
            "--hardware-cost" => hardware_cost = parse_num(flag, value)?,
            "--payout" => {
                payout = Coin::from_str(value)
                    .map_err(|_| anyhow::anyhow!("unknown payout coin: {value}"))?
            }
            "--period" => {
                period = Period::from_str(value)
                    .map_err(|_| anyhow::anyhow!("unknown period: {value}"))?
            }
            "--ltc-price" => ltc_price = Some(parse_num(flag, value)?),
            "--doge-price" => doge_price = Some(parse_num(flag, value)?),
            "--ltc-hashrate" => {
                ltc_network = Some(HashRate::from_terahashes(parse_num(flag, value)?))
            }
            "--doge-hashrate" => {
                doge_network = Some(HashRate::from_terahashes(parse_num(flag, value)?))
            }
            _ => bail!("unknown option: {flag}"),
        }
    }

    let hash_rate = hash_rate.context("--hash-rate is required")?;
    let power_watts = power.context("--power is required")?;

    Ok(EstimateArgs {
        miner: MinerConfig {
            hash_rate,
            power_watts,
            unit_count: units,
            pool_fee_percent: fee,
            energy_cost_per_kwh: energy_cost,
            hardware_cost_usd: hardware_cost,
            payout_coin: payout,
        },
        price_overrides: PriceState::new(ltc_price, doge_price),
        ltc_network,
        doge_network,
        offline,
        period,
    })
}

fn parse_num(flag: &str, value: &str) -> Result<f64> {
    value
        .parse()
        .with_context(|| format!("invalid value for {flag}: {value}"))
}

fn hashrate_source() -> BlockchairClient {
    match env::var("TANDEM_HASHRATE_API_URL") {
        Ok(url) => BlockchairClient::with_base_url(url),
        Err(_) => BlockchairClient::new(),
    }
}

fn price_source() -> CoinGeckoClient {
    match env::var("TANDEM_PRICE_API_URL") {
        Ok(url) => CoinGeckoClient::with_base_url(url),
        Err(_) => CoinGeckoClient::new(),
    }
}

async fn cmd_estimate(args: &[String]) -> Result<()> {
    let args = parse_estimate_args(args)?;

    let snapshot = if args.offline {
        market::MarketSnapshot {
            network: None,
            prices: None,
        }
    } else {
        market::fetch_snapshot(&hashrate_source(), &price_source()).await
    };

    // Live network figures, then built-in fallbacks, then per-chain
    // flag overrides on top of either.
    let base_network = snapshot.network.unwrap_or_else(|| {
        if !args.offline {
            warn!("live network hashrate unavailable, using built-in figures");
        }
        NetworkState::new(
            Coin::Ltc.fallback_network_hashrate(),
            Coin::Doge.fallback_network_hashrate(),
        )
    });
    let network = NetworkState::new(
        args.ltc_network.unwrap_or(base_network.ltc_hashrate),
        args.doge_network.unwrap_or(base_network.doge_hashrate),
    );

    // Unknown prices stay unknown; overrides apply per field.
    let prices = snapshot
        .prices
        .unwrap_or(PriceState::UNAVAILABLE)
        .with_overrides(args.price_overrides);

    let estimate = calculate(&args.miner, &network, &prices)?.over(args.period);
    print_report(&args.miner, &network, &estimate);
    Ok(())
}

fn print_report(miner: &MinerConfig, network: &NetworkState, estimate: &Estimate) {
    let period = estimate.period;

    println!("Network hashrate:");
    println!("  LTC:  {}", network.ltc_hashrate);
    println!("  DOGE: {}", network.doge_hashrate);
    println!(
        "Fleet: {} x {} at {} W each",
        miner.unit_count, miner.hash_rate, miner.power_watts
    );
    println!();

    println!(
        "Rewards per {period} (after {}% pool fee):",
        miner.pool_fee_percent
    );
    for coin in [Coin::Ltc, Coin::Doge] {
        println!("  {:.6} {}", estimate.coin(coin).net_reward, coin);
    }
    println!();

    println!("Power cost per {period}:  {}", fmt_usd(Some(estimate.power_cost_usd)));
    for coin in [Coin::Ltc, Coin::Doge] {
        println!(
            "{coin} revenue per {period}: {}",
            fmt_usd(estimate.coin(coin).revenue_usd)
        );
    }
    println!("Total revenue per {period}: {}", fmt_usd(estimate.total_revenue_usd));
    println!("Net profit per {period}:    {}", fmt_usd(estimate.net_profit_usd));

    match estimate.payout {
        Some(payout) => println!(
            "Combined payout: {:.6} {} per {period}",
            payout.amount, payout.coin
        ),
        None => println!(
            "Combined payout: n/a (needs both prices, including {})",
            miner.payout_coin
        ),
    }

    match estimate.break_even_days() {
        Some(days) => println!("Break-even: {days:.1} days"),
        None if miner.hardware_cost_usd == 0.0 => {
            println!("Break-even: n/a (no hardware cost given)")
        }
        None => println!("Break-even: n/a (not currently profitable)"),
    }

    if estimate.total_revenue_usd.is_none() {
        println!();
        println!("Provide both --ltc-price and --doge-price (or go online)");
        println!("to see fiat revenue and profit.");
    }
}

fn fmt_usd(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${v:.2}"),
        None => "n/a".to_string(),
    }
}

async fn cmd_market() -> Result<()> {
    let snapshot = market::fetch_snapshot(&hashrate_source(), &price_source()).await;

    match snapshot.network {
        Some(network) => {
            println!("LTC network hashrate:  {}", network.ltc_hashrate);
            println!("DOGE network hashrate: {}", network.doge_hashrate);
            let combined = HashRate::from_hashes(
                network.ltc_hashrate.as_hashes() + network.doge_hashrate.as_hashes(),
            );
            println!("Combined:              {combined}");
        }
        None => println!("Network hashrate: n/a"),
    }

    match snapshot.prices {
        Some(prices) => {
            println!("LTC price:  {}", fmt_usd(prices.ltc_usd));
            println!("DOGE price: {}", fmt_usd(prices.doge_usd));
        }
        None => println!("Prices: n/a"),
    }

    Ok(())
}
