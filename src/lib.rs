//! `meteora-http` is an async HTTP client for the Meteora REST APIs.
//!
//! [`MeteoraClient`] bundles one sub-client per API:
//! - [`dlmm`]: DLMM pools, plus the legacy pair listing
//! - [`dammv2`]: DAMM v2 pools
//! - [`dammv1`]: DAMM v1 pools, farms and alpha vaults
//! - [`stake2earn`]: Stake2Earn fee vaults
//! - [`dynamic_vault`]: Dynamic Vault state and APY
//!
//! Every request goes through [`Transport`], which retries transport failures,
//! HTTP 429 and 5xx responses with jittered exponential backoff and observes a
//! [`CancellationToken`](tokio_util::sync::CancellationToken) between attempts.

mod client;
mod error;
mod options;
mod query;
mod transport;

pub mod dammv1;
pub mod dammv2;
pub mod dlmm;
pub mod dynamic_vault;
pub mod stake2earn;
pub mod types;

pub use client::MeteoraClient;
pub use dammv1::DammV1Client;
pub use dammv2::DammV2Client;
pub use dlmm::DlmmClient;
pub use dynamic_vault::DynamicVaultClient;
pub use error::{ApiError, CancelStage, MeteoraError};
pub use options::{
    ClientOptions, RetryConfig, DEFAULT_BASE_DELAY, DEFAULT_DAMM_V1_BASE_URL,
    DEFAULT_DAMM_V2_BASE_URL, DEFAULT_DLMM_BASE_URL, DEFAULT_DLMM_LEGACY_BASE_URL,
    DEFAULT_DYNAMIC_VAULT_BASE_URL, DEFAULT_MAX_DELAY, DEFAULT_MAX_RETRIES,
    DEFAULT_STAKE2EARN_BASE_URL,
};
pub use query::Query;
pub use stake2earn::Stake2EarnClient;
pub use transport::{join_url, Transport, USER_AGENT};
pub use types::{PaginatedResponse, TimeframeParams};

pub use tokio_util::sync::CancellationToken;

pub type Result<T> = std::result::Result<T, MeteoraError>;
