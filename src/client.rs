use std::fmt;

use tokio_util::sync::CancellationToken;

use crate::{
    ClientOptions, DammV1Client, DammV2Client, DlmmClient, DynamicVaultClient, Stake2EarnClient,
    Transport,
};

#[derive(Clone)]
/// Entry point bundling a client for every Meteora API.
///
/// All sub-clients share one `reqwest::Client`, one retry configuration and
/// one cancellation token, so [`cancel_all_requests`](Self::cancel_all_requests)
/// stops in-flight and future requests on every API at once.
///
/// # Example
///
/// ```no_run
/// use meteora_http::MeteoraClient;
///
/// # async fn run() -> meteora_http::Result<()> {
/// let client = MeteoraClient::new();
/// let pools = client.dlmm.list_pools(None).await?;
/// println!("{} DLMM pools", pools.total);
/// # Ok(())
/// # }
/// ```
pub struct MeteoraClient {
    pub dlmm: DlmmClient,
    pub dammv2: DammV2Client,
    pub dammv1: DammV1Client,
    pub stake2earn: Stake2EarnClient,
    pub dynamic_vault: DynamicVaultClient,
    cancel: CancellationToken,
}

impl fmt::Debug for MeteoraClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeteoraClient")
            .field("dlmm", &self.dlmm)
            .field("dammv2", &self.dammv2)
            .field("dammv1", &self.dammv1)
            .field("stake2earn", &self.stake2earn)
            .field("dynamic_vault", &self.dynamic_vault)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}

impl Default for MeteoraClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MeteoraClient {
    /// Creates a client for the production APIs with the default retry
    /// configuration.
    pub fn new() -> Self {
        Self::with_options(ClientOptions::default())
    }

    pub fn with_options(options: ClientOptions) -> Self {
        Self::with_http_client(options, reqwest::Client::new())
    }

    /// Creates a client sending every request through `http`.
    ///
    /// Use this to configure timeouts, proxies or connection pooling.
    pub fn with_http_client(options: ClientOptions, http: reqwest::Client) -> Self {
        let retry = options.retry;
        let transport =
            |base_url: String| Transport::with_retry_config(base_url, Some(http.clone()), retry);
        let cancel = CancellationToken::new();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            dlmm = %options.dlmm_base_url,
            dammv2 = %options.dammv2_base_url,
            dammv1 = %options.dammv1_base_url,
            max_retries = retry.max_retries(),
            "creating meteora client"
        );

        Self {
            dlmm: DlmmClient::with_token(
                transport(options.dlmm_base_url),
                transport(options.dlmm_legacy_base_url),
                cancel.clone(),
            ),
            dammv2: DammV2Client::with_token(transport(options.dammv2_base_url), cancel.clone()),
            dammv1: DammV1Client::with_token(transport(options.dammv1_base_url), cancel.clone()),
            stake2earn: Stake2EarnClient::with_token(
                transport(options.stake2earn_base_url),
                cancel.clone(),
            ),
            dynamic_vault: DynamicVaultClient::with_token(
                transport(options.dynamic_vault_base_url),
                cancel.clone(),
            ),
            cancel,
        }
    }

    /// Cancels every pending and future request made through this client's
    /// sub-clients. Cancellation is permanent; build a new client to resume.
    pub fn cancel_all_requests(&self) {
        #[cfg(feature = "tracing")]
        tracing::debug!("cancelling all meteora requests");

        self.cancel.cancel();
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }
}

#[cfg(test)]
mod tests {
    use super::MeteoraClient;
    use crate::ClientOptions;

    #[test]
    fn sub_clients_share_one_token() {
        let client = MeteoraClient::new();
        assert!(!client.cancellation_token().is_cancelled());

        client.cancel_all_requests();

        assert!(client.dlmm.cancellation_token().is_cancelled());
        assert!(client.dammv2.cancellation_token().is_cancelled());
        assert!(client.dammv1.cancellation_token().is_cancelled());
        assert!(client.stake2earn.cancellation_token().is_cancelled());
        assert!(client.dynamic_vault.cancellation_token().is_cancelled());
    }

    #[test]
    fn rebound_sub_client_ignores_shared_token() {
        let client = MeteoraClient::with_options(ClientOptions::default());
        let own = tokio_util::sync::CancellationToken::new();
        let dlmm = client.dlmm.with_cancellation_token(own.clone());

        client.cancel_all_requests();

        assert!(!dlmm.cancellation_token().is_cancelled());
        own.cancel();
        assert!(dlmm.cancellation_token().is_cancelled());
    }
}
