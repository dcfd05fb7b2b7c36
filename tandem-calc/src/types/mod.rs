//! Shared value types.

mod hash_rate;

pub use hash_rate::HashRate;
