//! DLMM (Dynamic Liquidity Market Maker) pools.
//!
//! Pool data comes from the data API; [`DlmmClient::list_all_pairs`] uses the
//! legacy API, which has its own base URL.

mod params;
mod types;

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

pub use params::{GetGroupParams, ListGroupsParams, ListPoolsParams};
pub use types::{CumulativeMetrics, LegacyPair, LegacyTimeBuckets, Pool, PoolConfig};

use crate::types::{
    query_from, OhlcvResponse, PaginatedResponse, PoolGroup, ProtocolMetrics, TimeframeParams,
    VolumeHistoryResponse,
};
use crate::{Query, Result, Transport};

/// Client for the DLMM endpoints.
#[derive(Clone, Debug)]
pub struct DlmmClient {
    http: Transport,
    legacy: Transport,
    cancel: CancellationToken,
}

impl DlmmClient {
    /// Creates a client from the data API and legacy API transports.
    pub fn new(http: Transport, legacy: Transport) -> Self {
        Self::with_token(http, legacy, CancellationToken::new())
    }

    pub(crate) fn with_token(http: Transport, legacy: Transport, cancel: CancellationToken) -> Self {
        Self {
            http,
            legacy,
            cancel,
        }
    }

    /// Returns a copy of this client whose requests observe `token`.
    pub fn with_cancellation_token(&self, token: CancellationToken) -> Self {
        Self {
            cancel: token,
            ..self.clone()
        }
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Lists pools, one page at a time.
    pub async fn list_pools(
        &self,
        params: Option<&ListPoolsParams>,
    ) -> Result<PaginatedResponse<Pool>> {
        let query = query_from(params, ListPoolsParams::to_query);
        self.get("list_pools", "/pools", &query).await
    }

    /// Lists pools grouped by token pair.
    pub async fn list_groups(
        &self,
        params: Option<&ListGroupsParams>,
    ) -> Result<PaginatedResponse<PoolGroup>> {
        let query = query_from(params, ListGroupsParams::to_query);
        self.get("list_groups", "/pools/groups", &query).await
    }

    /// Lists the pools of one group.
    ///
    /// `lexical_order_mints` is the group key, both mints in lexical order
    /// joined with `-`.
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

    /// Candles for one pool.
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

    /// Every pair known to the legacy API, unpaginated.
    pub async fn list_all_pairs(&self) -> Result<Vec<LegacyPair>> {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            client = "dlmm",
            operation = "list_all_pairs",
            path = "/pair/all",
            "sending request"
        );

        self.legacy
            .get_list(&self.cancel, "/pair/all", &Query::new())
            .await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        query: &Query,
    ) -> Result<T> {
        #[cfg(feature = "tracing")]
        tracing::debug!(client = "dlmm", operation, path, "sending request");
        #[cfg(not(feature = "tracing"))]
        let _ = operation;

        self.http.get(&self.cancel, path, query).await
    }
}
