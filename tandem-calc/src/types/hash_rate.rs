//! Unit-safe hashrate type.
//!
//! Miner hash rates are usually quoted in GH/s and network hashrates in
//! TH/s. Keeping both in one type with a fixed base unit (hashes per
//! second) means the reward math never divides mismatched units.

use std::fmt;

const KILO: f64 = 1e3;
const MEGA: f64 = 1e6;
const GIGA: f64 = 1e9;
const TERA: f64 = 1e12;
const PETA: f64 = 1e15;

/// A hashrate, stored as whole hashes per second.
///
/// Sub-hash fractions are below measurement noise for any real miner, so
/// the integer base keeps `Eq`/`Ord` exact while GH/TH constructors accept
/// fractional values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HashRate(u64);

impl HashRate {
    pub const ZERO: Self = Self(0);

    pub const fn from_hashes(hashes_per_second: u64) -> Self {
        Self(hashes_per_second)
    }

    pub fn from_gigahashes(gh: f64) -> Self {
        Self((gh * GIGA) as u64)
    }

    pub fn from_terahashes(th: f64) -> Self {
        Self((th * TERA) as u64)
    }

    pub fn as_hashes(self) -> u64 {
        self.0
    }

    pub fn as_gigahashes(self) -> f64 {
        self.0 as f64 / GIGA
    }

    pub fn as_terahashes(self) -> f64 {
        self.0 as f64 / TERA
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Fraction of `whole` that this rate represents.
    ///
    /// This is the miner's expected share of blocks when `whole` is the
    /// network hashrate. `whole` must be non-zero; the calculator
    /// validates network hashrates before calling this.
    pub fn fraction_of(self, whole: HashRate) -> f64 {
        self.0 as f64 / whole.0 as f64
    }
}

impl From<u64> for HashRate {
    fn from(hashes_per_second: u64) -> Self {
        Self(hashes_per_second)
    }
}

impl fmt::Display for HashRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rate = self.0 as f64;
        let (scaled, unit) = if rate >= PETA {
            (rate / PETA, "PH/s")
        } else if rate >= TERA {
            (rate / TERA, "TH/s")
        } else if rate >= GIGA {
            (rate / GIGA, "GH/s")
        } else if rate >= MEGA {
            (rate / MEGA, "MH/s")
        } else if rate >= KILO {
            (rate / KILO, "kH/s")
        } else {
            return write!(f, "{} H/s", self.0);
        };
        write!(f, "{:.2} {}", scaled, unit)
    }
}
