//! Response and parameter types shared by the DLMM and DAMM v2 APIs.

use serde::{Deserialize, Serialize};

use crate::Query;

/// One page of a paginated listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginatedResponse<T> {
    /// Total number of items across all pages.
    pub total: u64,
    pub pages: u64,
    pub current_page: u64,
    pub page_size: u64,
    pub data: Vec<T>,
}

/// Metric aggregated over rolling windows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeBuckets {
    #[serde(rename = "30m")]
    pub min_30: f64,
    #[serde(rename = "1h")]
    pub hour_1: f64,
    #[serde(rename = "2h")]
    pub hour_2: f64,
    #[serde(rename = "4h")]
    pub hour_4: f64,
    #[serde(rename = "12h")]
    pub hour_12: f64,
    #[serde(rename = "24h")]
    pub hour_24: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Token {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub is_verified: bool,
    pub holders: i64,
    pub freeze_authority_disabled: bool,
    pub total_supply: f64,
    pub price: f64,
    pub market_cap: f64,
}

/// Pools trading the same token pair.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolGroup {
    /// Both mints in lexical order, joined with `-`.
    pub lexical_order_mints: String,
    pub group_name: String,
    pub token_x: String,
    pub token_y: String,
    pub pool_count: u32,
    pub total_tvl: f64,
    pub total_volume: f64,
    pub max_fee_tvl_ratio: f64,
    pub has_farm: bool,
    pub max_farm_apr: f64,
}

/// One candle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ohlcv {
    pub timestamp: i64,
    pub timestamp_str: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OhlcvResponse {
    pub start_time: i64,
    pub end_time: i64,
    pub timeframe: String,
    pub data: Vec<Ohlcv>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeHistory {
    pub timestamp: i64,
    pub timestamp_str: String,
    pub volume: f64,
    pub fees: f64,
    pub protocol_fees: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeHistoryResponse {
    pub start_time: i64,
    pub end_time: i64,
    pub timeframe: String,
    pub data: Vec<VolumeHistory>,
}

/// Protocol-wide totals.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolMetrics {
    pub total_tvl: f64,
    pub volume_24h: f64,
    pub fee_24h: f64,
    pub total_volume: f64,
    pub total_fees: f64,
    pub total_pools: u64,
}

/// Time window for OHLCV and volume history queries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeframeParams {
    /// Bucket size, e.g. `"1h"` or `"1d"`.
    pub timeframe: Option<String>,
    /// Unix seconds.
    pub start_time: Option<i64>,
    /// Unix seconds.
    pub end_time: Option<i64>,
}

impl TimeframeParams {
    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .set_opt("timeframe", self.timeframe.as_deref())
            .set_opt("start_time", self.start_time)
            .set_opt("end_time", self.end_time);
        query
    }
}

/// Builds the query for optional parameters, empty when absent.
pub(crate) fn query_from<P>(params: Option<&P>, to_query: impl FnOnce(&P) -> Query) -> Query {
    params.map(to_query).unwrap_or_default()
}
