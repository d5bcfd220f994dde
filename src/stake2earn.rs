//! Stake2Earn fee vaults.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::types::query_from;
use crate::{Query, Result, Transport};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Analytics {
    pub total_fee_vaults: u64,
    pub total_staked_amount_usd: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultFlags {
    pub tvl_usd_threshold_reached: bool,
    pub tvl_usd_threshold: f64,
}

/// Stake-for-fee vault.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vault {
    pub vault_address: String,
    pub pool_address: String,
    pub token_a_mint: String,
    pub token_b_mint: String,
    pub stake_mint: String,
    pub token_a_symbol: String,
    pub token_b_symbol: String,
    pub total_staked_amount: f64,
    pub total_staked_amount_usd: f64,
    pub current_reward_token_a_usd: f64,
    pub current_reward_token_b_usd: f64,
    pub current_reward_usd: f64,
    pub daily_reward_usd: f64,
    pub created_at_slot: u64,
    pub created_at_slot_timestamp: i64,
    pub created_at_tx_sig: String,
    pub seconds_to_full_unlock: i64,
    pub start_fee_distribute_timestamp: i64,
    #[serde(rename = "marketcap")]
    pub market_cap: f64,
    pub flags: VaultFlags,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultListResponse {
    pub total: u64,
    pub data: Vec<Vault>,
}

/// Filters for [`Stake2EarnClient::filter_vaults`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub search_term: Option<String>,
}

impl FilterParams {
    fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .set_opt("page", self.page)
            .set_opt("size", self.size)
            .set_opt("sort_by", self.sort_by.as_deref())
            .set_opt("sort_order", self.sort_order.as_deref())
            .set_opt("search_term", self.search_term.as_deref());
        query
    }
}

/// Client for the Stake2Earn API.
#[derive(Clone, Debug)]
pub struct Stake2EarnClient {
    http: Transport,
    cancel: CancellationToken,
}

impl Stake2EarnClient {
    pub fn new(http: Transport) -> Self {
        Self::with_token(http, CancellationToken::new())
    }

    pub(crate) fn with_token(http: Transport, cancel: CancellationToken) -> Self {
        Self { http, cancel }
    }

    /// Returns a copy of this client whose requests observe `token`.
    pub fn with_cancellation_token(&self, token: CancellationToken) -> Self {
        Self::with_token(self.http.clone(), token)
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub async fn get_analytics(&self) -> Result<Analytics> {
        self.get("get_analytics", "/analytics/all", &Query::new())
            .await
    }

    pub async fn list_vaults(&self) -> Result<VaultListResponse> {
        self.get("list_vaults", "/vault/all", &Query::new()).await
    }

    pub async fn filter_vaults(&self, params: Option<&FilterParams>) -> Result<VaultListResponse> {
        let query = query_from(params, FilterParams::to_query);
        self.get("filter_vaults", "/vault/filter", &query).await
    }

    pub async fn get_vault(&self, address: &str) -> Result<Vault> {
        let path = format!("/vault/{address}");
        self.get("get_vault", &path, &Query::new()).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        query: &Query,
    ) -> Result<T> {
        #[cfg(feature = "tracing")]
        tracing::debug!(client = "stake2earn", operation, path, "sending request");
        #[cfg(not(feature = "tracing"))]
        let _ = operation;

        self.http.get(&self.cancel, path, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterParams, VaultListResponse};

    #[test]
    fn vault_list_maps_marketcap() {
        let list: VaultListResponse = serde_json::from_str(
            r#"{"total": 1, "data": [{"vault_address": "v", "marketcap": 1.5e6, "flags": {"tvl_usd_threshold_reached": true}}]}"#,
        )
        .expect("valid vault list");

        assert_eq!(list.total, 1);
        assert_eq!(list.data[0].market_cap, 1.5e6);
        assert!(list.data[0].flags.tvl_usd_threshold_reached);
    }

    #[test]
    fn filter_params_encode() {
        let params = FilterParams {
            page: Some(0),
            size: Some(10),
            sort_order: Some("desc".into()),
            ..Default::default()
        };
        assert_eq!(params.to_query().encode(), "page=0&size=10&sort_order=desc");
    }
}
