//! DAMM v1 (Dynamic AMM) pools, farms and alpha vaults.

mod params;
mod types;

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

pub use params::{AlphaVaultParams, PaginationParams, SearchParams};
pub use types::{
    AlphaVault, AlphaVaultConfigs, FcfsConfig, FeeConfig, MetricsBreakdown, Pool, PoolConfig,
    PoolMetrics, ProrataConfig, SearchResult,
};

use crate::types::query_from;
use crate::{Query, Result, Transport};

/// Client for the DAMM v1 API.
#[derive(Clone, Debug)]
pub struct DammV1Client {
    http: Transport,
    cancel: CancellationToken,
}

impl DammV1Client {
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

    /// Lists pools, optionally restricted to one pool address.
    ///
    /// An empty address is treated as absent.
    pub async fn list_pools(&self, address: Option<&str>) -> Result<Vec<Pool>> {
        let mut query = Query::new();
        query.set_opt("address", address.filter(|address| !address.is_empty()));
        self.list("list_pools", "/pools", &query).await
    }

    pub async fn search_pools(&self, params: Option<&SearchParams>) -> Result<SearchResult> {
        let query = query_from(params, SearchParams::to_query);
        self.get("search_pools", "/pools/search", &query).await
    }

    pub async fn get_pools_metrics(&self) -> Result<PoolMetrics> {
        self.get("get_pools_metrics", "/pools-metrics", &Query::new())
            .await
    }

    pub async fn list_pool_configs(&self) -> Result<Vec<PoolConfig>> {
        self.list("list_pool_configs", "/pool-configs", &Query::new())
            .await
    }

    /// Fee configurations attached to the config account `config_address`.
    pub async fn get_fee_config(&self, config_address: &str) -> Result<Vec<FeeConfig>> {
        let path = format!("/fee-config/{config_address}");
        self.list("get_fee_config", &path, &Query::new()).await
    }

    pub async fn list_pools_with_farm(
        &self,
        params: Option<&PaginationParams>,
    ) -> Result<Vec<Pool>> {
        let query = query_from(params, PaginationParams::to_query);
        self.list("list_pools_with_farm", "/farm", &query).await
    }

    pub async fn list_alpha_vaults(
        &self,
        params: Option<&AlphaVaultParams>,
    ) -> Result<Vec<AlphaVault>> {
        let query = query_from(params, AlphaVaultParams::to_query);
        self.list("list_alpha_vaults", "/alpha-vault", &query).await
    }

    pub async fn list_alpha_vault_configs(&self) -> Result<AlphaVaultConfigs> {
        self.get("list_alpha_vault_configs", "/alpha-vault-configs", &Query::new())
            .await
    }

    /// Pools holding the vault LP token `address`.
    ///
    /// This endpoint is a POST with the address in the query string and no
    /// request body.
    pub async fn get_pools_by_vault_lp(&self, address: &str) -> Result<Vec<Pool>> {
        let query = Query::from([("address", address)]);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            client = "dammv1",
            operation = "get_pools_by_vault_lp",
            path = "/get_pools_by_a_vault_lp",
            "sending request"
        );

        self.http
            .post_list(&self.cancel, "/get_pools_by_a_vault_lp", &query)
            .await
    }

    async fn list<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        query: &Query,
    ) -> Result<Vec<T>> {
        #[cfg(feature = "tracing")]
        tracing::debug!(client = "dammv1", operation, path, "sending request");
        #[cfg(not(feature = "tracing"))]
        let _ = operation;

        self.http.get_list(&self.cancel, path, query).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        query: &Query,
    ) -> Result<T> {
        #[cfg(feature = "tracing")]
        tracing::debug!(client = "dammv1", operation, path, "sending request");
        #[cfg(not(feature = "tracing"))]
        let _ = operation;

        self.http.get(&self.cancel, path, query).await
    }
}
