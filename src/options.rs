use std::time::Duration;

use rand::Rng;

use crate::{MeteoraError, Result};

/// Retries applied after the initial attempt when none are configured.
pub const DEFAULT_MAX_RETRIES: u32 = 5;
/// Backoff before the first retry when none is configured.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(100);
/// Ceiling on a single backoff wait when none is configured.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(5);

pub const DEFAULT_DLMM_BASE_URL: &str = "https://dlmm.datapi.meteora.ag";
pub const DEFAULT_DLMM_LEGACY_BASE_URL: &str = "https://dlmm-api.meteora.ag";
pub const DEFAULT_DAMM_V2_BASE_URL: &str = "https://damm-v2.datapi.meteora.ag";
pub const DEFAULT_DAMM_V1_BASE_URL: &str = "https://amm-v2.meteora.ag";
pub const DEFAULT_STAKE2EARN_BASE_URL: &str = "https://stake-for-fee-api.meteora.ag";
pub const DEFAULT_DYNAMIC_VAULT_BASE_URL: &str = "https://merv2-api.meteora.ag";

/// Retry behavior of a [`Transport`](crate::Transport).
///
/// Values are normalized on construction: a zero retry count or a zero delay
/// falls back to its default, and `max_delay` is never below `base_delay`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryConfig {
    max_retries: u32,
    base_delay: Duration,
    max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }
}

impl RetryConfig {
    /// Builds a normalized retry configuration.
    pub fn new(max_retries: u32, base_delay: Duration, max_delay: Duration) -> Self {
        let max_retries = if max_retries == 0 {
            DEFAULT_MAX_RETRIES
        } else {
            max_retries
        };
        let base_delay = if base_delay.is_zero() {
            DEFAULT_BASE_DELAY
        } else {
            base_delay
        };
        let max_delay = if max_delay.is_zero() {
            DEFAULT_MAX_DELAY
        } else {
            max_delay
        };

        Self {
            max_retries,
            base_delay,
            max_delay: max_delay.max(base_delay),
        }
    }

    pub fn with_max_retries(self, max_retries: u32) -> Self {
        Self::new(max_retries, self.base_delay, self.max_delay)
    }

    pub fn with_base_delay(self, base_delay: Duration) -> Self {
        Self::new(self.max_retries, base_delay, self.max_delay)
    }

    pub fn with_max_delay(self, max_delay: Duration) -> Self {
        Self::new(self.max_retries, self.base_delay, max_delay)
    }

    /// Maximum number of retries after the initial attempt.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    pub fn max_delay(&self) -> Duration {
        self.max_delay
    }

    /// Backoff to wait after the given failed attempt (1-based).
    ///
    /// `base_delay * 2^(attempt - 1)` plus a uniform jitter in `[0, delay / 4)`,
    /// capped at `max_delay`.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let delay = self.exponential_delay(attempt);
        let jitter_ceiling = delay / 4;
        let jitter = if jitter_ceiling.is_zero() {
            Duration::ZERO
        } else {
            rand::thread_rng().gen_range(Duration::ZERO..jitter_ceiling)
        };

        delay.saturating_add(jitter).min(self.max_delay)
    }

    fn exponential_delay(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(31);
        self.base_delay.saturating_mul(1u32 << exp)
    }
}

/// Base URLs and retry behavior used by [`MeteoraClient`](crate::MeteoraClient).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    pub dlmm_base_url: String,
    pub dlmm_legacy_base_url: String,
    pub dammv2_base_url: String,
    pub dammv1_base_url: String,
    pub stake2earn_base_url: String,
    pub dynamic_vault_base_url: String,
    /// Retry behavior shared by every sub-client.
    pub retry: RetryConfig,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            dlmm_base_url: DEFAULT_DLMM_BASE_URL.to_owned(),
            dlmm_legacy_base_url: DEFAULT_DLMM_LEGACY_BASE_URL.to_owned(),
            dammv2_base_url: DEFAULT_DAMM_V2_BASE_URL.to_owned(),
            dammv1_base_url: DEFAULT_DAMM_V1_BASE_URL.to_owned(),
            stake2earn_base_url: DEFAULT_STAKE2EARN_BASE_URL.to_owned(),
            dynamic_vault_base_url: DEFAULT_DYNAMIC_VAULT_BASE_URL.to_owned(),
            retry: RetryConfig::default(),
        }
    }
}

impl ClientOptions {
    /// Overrides the DLMM datapi base URL.
    pub fn with_dlmm_base_url(mut self, url: impl Into<String>) -> Self {
        self.dlmm_base_url = url.into();
        self
    }

    /// Overrides the DLMM legacy API base URL.
    pub fn with_dlmm_legacy_base_url(mut self, url: impl Into<String>) -> Self {
        self.dlmm_legacy_base_url = url.into();
        self
    }

    /// Overrides the DAMM v2 datapi base URL.
    pub fn with_dammv2_base_url(mut self, url: impl Into<String>) -> Self {
        self.dammv2_base_url = url.into();
        self
    }

    /// Overrides the DAMM v1 API base URL.
    pub fn with_dammv1_base_url(mut self, url: impl Into<String>) -> Self {
        self.dammv1_base_url = url.into();
        self
    }

    /// Overrides the Stake2Earn API base URL.
    pub fn with_stake2earn_base_url(mut self, url: impl Into<String>) -> Self {
        self.stake2earn_base_url = url.into();
        self
    }

    /// Overrides the Dynamic Vault API base URL.
    pub fn with_dynamic_vault_base_url(mut self, url: impl Into<String>) -> Self {
        self.dynamic_vault_base_url = url.into();
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Builds options from environment variables.
    ///
    /// Reads, all optional:
    /// - `METEORA_DLMM_BASE_URL`, `METEORA_DLMM_LEGACY_BASE_URL`
    /// - `METEORA_DAMM_V2_BASE_URL`, `METEORA_DAMM_V1_BASE_URL`
    /// - `METEORA_STAKE2EARN_BASE_URL`, `METEORA_DYNAMIC_VAULT_BASE_URL`
    /// - `METEORA_MAX_RETRIES`, `METEORA_BASE_DELAY_MS`, `METEORA_MAX_DELAY_MS`
    ///
    /// Unset or blank variables keep their defaults.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use meteora_http::{ClientOptions, MeteoraClient};
    ///
    /// let options = ClientOptions::from_env().expect("invalid METEORA_* env vars");
    /// let client = MeteoraClient::with_options(options);
    /// ```
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };
        let number = |key: &str| -> Result<Option<u64>> {
            var(key)
                .map(|value| {
                    value.parse::<u64>().map_err(|err| {
                        MeteoraError::Config(format!("{key}={value:?} is not a number: {err}"))
                    })
                })
                .transpose()
        };

        let mut options = Self::default();
        for (key, slot) in [
            ("METEORA_DLMM_BASE_URL", &mut options.dlmm_base_url),
            ("METEORA_DLMM_LEGACY_BASE_URL", &mut options.dlmm_legacy_base_url),
            ("METEORA_DAMM_V2_BASE_URL", &mut options.dammv2_base_url),
            ("METEORA_DAMM_V1_BASE_URL", &mut options.dammv1_base_url),
            ("METEORA_STAKE2EARN_BASE_URL", &mut options.stake2earn_base_url),
            (
                "METEORA_DYNAMIC_VAULT_BASE_URL",
                &mut options.dynamic_vault_base_url,
            ),
        ] {
            if let Some(url) = var(key) {
                *slot = url;
            }
        }

        let max_retries = match number("METEORA_MAX_RETRIES")? {
            Some(value) => u32::try_from(value).map_err(|_| {
                MeteoraError::Config(format!("METEORA_MAX_RETRIES={value} is out of range"))
            })?,
            None => DEFAULT_MAX_RETRIES,
        };
        let base_delay = number("METEORA_BASE_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_BASE_DELAY);
        let max_delay = number("METEORA_MAX_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_MAX_DELAY);
        options.retry = RetryConfig::new(max_retries, base_delay, max_delay);

        Ok(options)
    }
}
