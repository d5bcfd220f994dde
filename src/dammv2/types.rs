use serde::{Deserialize, Serialize};

use crate::types::{TimeBuckets, Token};

/// DAMM v2 pool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pool {
    pub address: String,
    pub name: String,
    pub token_x: Token,
    pub token_y: Token,
    pub token_x_amount: f64,
    pub token_y_amount: f64,
    pub created_at: i64,
    pub vault_x: String,
    pub vault_y: String,
    /// Empty when the pool has no alpha vault.
    pub alpha_vault: String,
    pub pool_config: PoolConfig,
    pub tvl: f64,
    pub current_price: f64,
    pub has_farm: bool,
    pub farm_apr: f64,
    pub farm_apy: f64,
    pub permanent_lock_liquidity: f64,
    pub vested_liquidity: VestedLiquidity,
    pub volume: TimeBuckets,
    pub fees: TimeBuckets,
    pub protocol_fees: TimeBuckets,
    pub fee_tvl_ratio: TimeBuckets,
    pub is_blacklisted: bool,
    pub launchpad: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub collect_fee_mode: i32,
    pub base_fee_mode: i32,
    pub base_fee_pct: f64,
    pub protocol_fee_pct: f64,
    pub partner_fee_pct: f64,
    pub referral_fee_pct: f64,
    pub dynamic_fee_initialized: bool,
    pub pool_type: i32,
    pub concentrated_liquidity: bool,
    pub min_price: f64,
    pub max_price: f64,
    pub activation_type: i32,
    pub activation_point: i64,
}

/// Liquidity still vesting, by remaining horizon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VestedLiquidity {
    pub months_3: f64,
    pub months_6: f64,
}
