use serde::{Deserialize, Serialize};

use crate::types::{TimeBuckets, Token};

/// DLMM pool as returned by the data API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pool {
    pub address: String,
    pub name: String,
    pub token_x: Token,
    pub token_y: Token,
    pub reserve_x: String,
    pub reserve_y: String,
    pub token_x_amount: f64,
    pub token_y_amount: f64,
    /// Unix seconds.
    pub created_at: i64,
    pub reward_mint_x: String,
    pub reward_mint_y: String,
    pub pool_config: PoolConfig,
    pub dynamic_fee_pct: f64,
    pub tvl: f64,
    pub current_price: f64,
    pub apr: f64,
    pub apy: f64,
    pub has_farm: bool,
    pub farm_apr: f64,
    pub farm_apy: f64,
    pub volume: TimeBuckets,
    pub fees: TimeBuckets,
    pub protocol_fees: TimeBuckets,
    pub fee_tvl_ratio: TimeBuckets,
    pub cumulative_metrics: CumulativeMetrics,
    pub is_blacklisted: bool,
    pub launchpad: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub bin_step: u32,
    pub base_fee_pct: f64,
    pub max_fee_pct: f64,
    pub protocol_fee_pct: f64,
}

/// Lifetime totals of a pool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CumulativeMetrics {
    pub volume: f64,
    pub trade_fee: f64,
    pub protocol_fee: f64,
}

/// Rolling-window metric in the legacy API's key format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyTimeBuckets {
    pub min_30: f64,
    pub hour_1: f64,
    pub hour_2: f64,
    pub hour_4: f64,
    pub hour_12: f64,
    pub hour_24: f64,
}

/// Pair from the legacy DLMM API.
///
/// Amounts that may exceed `f64` precision are kept as strings, as the API
/// sends them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyPair {
    pub address: String,
    pub name: String,
    pub mint_x: String,
    pub mint_y: String,
    pub reserve_x: String,
    pub reserve_y: String,
    pub reserve_x_amount: u64,
    pub reserve_y_amount: u64,
    pub bin_step: u32,
    pub base_fee_percentage: String,
    pub max_fee_percentage: String,
    pub protocol_fee_percentage: String,
    pub liquidity: String,
    pub reward_mint_x: String,
    pub reward_mint_y: String,
    pub fees_24h: f64,
    pub today_fees: f64,
    pub trade_volume_24h: f64,
    pub cumulative_trade_volume: String,
    pub cumulative_fee_volume: String,
    pub current_price: f64,
    pub apr: f64,
    pub apy: f64,
    pub farm_apr: f64,
    pub farm_apy: f64,
    pub hide: bool,
    pub is_blacklisted: bool,
    pub fees: LegacyTimeBuckets,
    pub fee_tvl_ratio: LegacyTimeBuckets,
    pub volume: LegacyTimeBuckets,
    pub tags: Vec<String>,
    pub launchpad: Option<String>,
    pub is_verified: bool,
}
