//! DAMM v2 (Dynamic AMM v2) pools.

mod params;
mod types;

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

pub use params::{GetGroupParams, ListGroupsParams, ListPoolsParams};
pub use types::{Pool, PoolConfig, VestedLiquidity};

use crate::types::{
    query_from, OhlcvResponse, PaginatedResponse, PoolGroup, ProtocolMetrics, TimeframeParams,
    VolumeHistoryResponse,
};
use crate::{Query, Result, Transport};

/// Client for the DAMM v2 data API.
#[derive(Clone, Debug)]
pub struct DammV2Client {
    http: Transport,
    cancel: CancellationToken,
}

impl DammV2Client {
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

    pub async fn list_pools(
        &self,
        params: Option<&ListPoolsParams>,
    ) -> Result<PaginatedResponse<Pool>> {
        let query = query_from(params, ListPoolsParams::to_query);
        self.get("list_pools", "/pools", &query).await
    }

    pub async fn list_groups(
        &self,
        params: Option<&ListGroupsParams>,
    ) -> Result<PaginatedResponse<PoolGroup>> {
        let query = query_from(params, ListGroupsParams::to_query);
        self.get("list_groups", "/pools/groups", &query).await
    }

    /// Lists the pools of the group keyed by `lexical_order_mints`.
    pub async fn get_group(
        &self,
        lexical_order_mints: &str,
        params: Option<&GetGroupParams>,
    ) -> Result<PaginatedResponse<Pool>> {
        let query = query_from(params, GetGroupParams::to_query);
        let path = format!("/pools/groups/{lexical_order_mints}");
        self.get("get_group", &path, &query).await
    }

    pub async fn get_pool(&self, address: &str) -> Result<Pool> {
        let path = format!("/pools/{address}");
        self.get("get_pool", &path, &Query::new()).await
    }

    pub async fn get_ohlcv(
        &self,
        address: &str,
        params: Option<&TimeframeParams>,
    ) -> Result<OhlcvResponse> {
        let query = query_from(params, TimeframeParams::to_query);
        let path = format!("/pools/{address}/ohlcv");
        self.get("get_ohlcv", &path, &query).await
    }

    pub async fn get_volume_history(
        &self,
        address: &str,
        params: Option<&TimeframeParams>,
    ) -> Result<VolumeHistoryResponse> {
        let query = query_from(params, TimeframeParams::to_query);
        let path = format!("/pools/{address}/volume/history");
        self.get("get_volume_history", &path, &query).await
    }

    pub async fn get_protocol_metrics(&self) -> Result<ProtocolMetrics> {
        self.get("get_protocol_metrics", "/stats/protocol_metrics", &Query::new())
            .await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        query: &Query,
    ) -> Result<T> {
        #[cfg(feature = "tracing")]
        tracing::debug!(client = "dammv2", operation, path, "sending request");
        #[cfg(not(feature = "tracing"))]
        let _ = operation;

        self.http.get(&self.cancel, path, query).await
    }
}
