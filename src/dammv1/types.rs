use serde::{Deserialize, Serialize};

/// DAMM v1 pool.
///
/// Most numeric fields arrive as decimal strings and are kept that way.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pool {
    pub pool_address: String,
    pub pool_token_mints: Vec<String>,
    pub pool_token_amounts: Vec<String>,
    pub pool_token_usd_amounts: Vec<String>,
    pub vaults: Vec<String>,
    pub vault_lps: Vec<String>,
    pub lp_mint: String,
    pub pool_tvl: String,
    pub farm_tvl: String,
    pub farming_pool: Option<String>,
    pub farming_apy: String,
    pub is_monitoring: bool,
    pub pool_order: i32,
    pub farm_order: i32,
    pub pool_version: i32,
    pub pool_name: String,
    pub lp_decimal: u8,
    pub farm_reward_duration_end: i64,
    pub farm_expire: bool,
    pub pool_lp_price_in_usd: String,
    pub trading_volume: f64,
    pub fee_volume: f64,
    pub weekly_trading_volume: f64,
    pub weekly_fee_volume: f64,
    pub yield_volume: String,
    pub accumulated_trading_volume: String,
    pub accumulated_fee_volume: String,
    pub accumulated_yield_volume: String,
    pub trade_apy: String,
    pub weekly_trade_apy: String,
    pub daily_base_apy: String,
    pub weekly_base_apy: String,
    pub apr: f64,
    pub farm_new: bool,
    pub permissioned: bool,
    pub unknown: bool,
    pub total_fee_pct: String,
    pub is_lst: bool,
    pub is_forex: bool,
    pub created_at: i64,
    pub is_meme: bool,
    pub pool_type: String,
}

/// One page of [`Pool`] search results.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    pub data: Vec<Pool>,
    pub page: u32,
    pub total_count: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsBreakdown {
    pub tvl: f64,
    pub daily_volume: f64,
    pub total_volume: f64,
    pub daily_fee: f64,
    pub total_fee: f64,
}

/// Aggregated metrics across all DAMM v1 pools.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolMetrics {
    pub dynamic_amm_tvl: f64,
    pub dynamic_amm_daily_volume: f64,
    pub dynamic_amm_total_volume: f64,
    pub dynamic_amm_daily_fee: f64,
    pub dynamic_amm_total_fee: f64,
    pub multitokens_tvl: f64,
    pub multitokens_daily_volume: f64,
    pub multitokens_total_volume: f64,
    pub multitokens_daily_fee: f64,
    pub multitokens_total_fee: f64,
    pub dynamic_amm: MetricsBreakdown,
    pub lst: MetricsBreakdown,
    pub farms: MetricsBreakdown,
    pub multitokens: MetricsBreakdown,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub config_address: String,
    pub trade_fee_bps: u32,
    pub protocol_fee_bps: u32,
    pub activation_duration: i64,
    pub vault_config_key: String,
    pub pool_creator_authority: String,
    pub activation_type: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeConfig {
    pub config_address: String,
    pub creator_authority: String,
    pub activate_duration_after_trade_in_seconds: i64,
    pub fee_percentage: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphaVault {
    pub vault_address: String,
    pub pool_address: String,
    pub token_vault: String,
    pub token_out_vault: String,
    pub base_mint: String,
    pub quote_mint: String,
    pub base: String,
    pub owner: String,
    pub pool_type: i32,
}

/// Pro-rata alpha vault configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProrataConfig {
    pub address: String,
    pub max_buying_cap: i64,
    pub start_vesting_duration: i64,
    pub end_vesting_duration: i64,
    pub escrow_fee: i64,
    pub activation_type: i32,
}

/// First-come-first-served alpha vault configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FcfsConfig {
    pub address: String,
    pub max_depositing_cap: i64,
    pub start_vesting_duration: i64,
    pub end_vesting_duration: i64,
    pub depositing_duration_until_last_join_point: i64,
    pub individual_depositing_cap: i64,
    pub escrow_fee: i64,
    pub activation_type: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphaVaultConfigs {
    pub prorata_configs: Vec<ProrataConfig>,
    pub fcfs_configs: Vec<FcfsConfig>,
}
