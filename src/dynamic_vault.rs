//! Dynamic (Mercurial v2) vaults.

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::{Query, Result, Transport};

/// Lending strategy a vault allocates to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Strategy {
    pub pubkey: String,
    pub reserve: String,
    pub strategy_type: String,
    pub strategy_name: String,
    pub liquidity: u64,
    pub max_allocation: f64,
    pub isolated: bool,
    pub disabled: bool,
    pub safe_utilization_threshold: f64,
}

/// Vault summary. Raw token amounts are in base units.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultInfo {
    pub symbol: String,
    pub token_address: String,
    pub pubkey: String,
    pub is_monitoring: bool,
    pub vault_order: i32,
    pub usd_rate: f64,
    pub closest_apy: f64,
    pub average_apy: f64,
    pub long_apy: f64,
    pub earned_amount: u64,
    pub virtual_price: String,
    /// `1` when deposits are enabled.
    pub enabled: i32,
    pub lp_mint: String,
    pub fee_pubkey: String,
    pub total_amount: u64,
    pub total_amount_with_profit: u64,
    pub token_amount: u64,
    pub fee_amount: u64,
    pub lp_supply: u64,
    pub earned_usd_amount: f64,
    pub strategies: Vec<Strategy>,
    pub timestamp: i64,
}

/// State of a single vault; same shape as [`VaultInfo`].
pub type VaultState = VaultInfo;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultAddress {
    pub symbol: String,
    pub vault_address: String,
    pub lp_mint_address: String,
    pub fee_address: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApyBreakdown {
    pub strategy_name: String,
    pub strategy: String,
    pub apy: f64,
}

/// APY per strategy over three horizons.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApyState {
    pub closest_apy: Vec<ApyBreakdown>,
    pub average_apy: Vec<ApyBreakdown>,
    pub long_apy: Vec<ApyBreakdown>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApyEntry {
    pub apy: f64,
    pub timestamp: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualPrice {
    /// Decimal string.
    pub price: String,
    pub timestamp: i64,
}

/// Client for the Dynamic Vault API.
#[derive(Clone, Debug)]
pub struct DynamicVaultClient {
    http: Transport,
    cancel: CancellationToken,
}

impl DynamicVaultClient {
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

    pub async fn list_vault_info(&self) -> Result<Vec<VaultInfo>> {
        self.list("/vault_info").await
    }

    pub async fn list_vault_addresses(&self) -> Result<Vec<VaultAddress>> {
        self.list("/vault_addresses").await
    }

    /// State of the vault for `token_mint`.
    pub async fn get_vault_state(&self, token_mint: &str) -> Result<VaultState> {
        self.get(&format!("/vault_state/{token_mint}")).await
    }

    pub async fn get_apy_state(&self, token_mint: &str) -> Result<ApyState> {
        self.get(&format!("/apy_state/{token_mint}")).await
    }

    /// APY samples between `start` and `end`, both Unix seconds.
    pub async fn get_apy_by_time_range(
        &self,
        token_mint: &str,
        start: i64,
        end: i64,
    ) -> Result<Vec<ApyEntry>> {
        self.list(&format!("/apy_filter/{token_mint}/{start}/{end}"))
            .await
    }

    /// Virtual price history of one strategy of the vault for `token_mint`.
    pub async fn get_virtual_price(
        &self,
        token_mint: &str,
        strategy: &str,
    ) -> Result<Vec<VirtualPrice>> {
        self.list(&format!("/virtual_price/{token_mint}/{strategy}"))
            .await
    }

    async fn list<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        #[cfg(feature = "tracing")]
        tracing::debug!(client = "dynamic_vault", path, "sending request");

        self.http.get_list(&self.cancel, path, &Query::new()).await
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        #[cfg(feature = "tracing")]
        tracing::debug!(client = "dynamic_vault", path, "sending request");

        self.http.get(&self.cancel, path, &Query::new()).await
    }
}
