//! Profitability estimation for merged mining on the Litecoin + Dogecoin
//! pair.
//!
//! A scrypt miner earns both chains' block rewards from one hashing
//! effort. This crate turns a miner's hash rate and power draw, plus the
//! current network hashrates and spot prices, into expected coin rewards,
//! fiat revenue, operating cost, net profit, and hardware payback time.
//!
//! The [`estimate`] module is the core: a pure, synchronous calculation
//! with explicit handling of missing market data. The [`market`] module
//! holds the async collaborators that fetch network hashrates and prices
//! from public APIs. Neither knows about the other; callers (such as the
//! `tandem-cli` binary) wire them together.

pub mod chain;
pub mod estimate;
pub mod market;
pub mod tracing;
pub mod types;
