//! HTTP fetching with a bounded retry loop.
//!
//! The chart pages live at fixed, versionless URLs and change rarely, so
//! fetching is sequential and deliberately simple: one cancellable request
//! per attempt, a fixed delay between attempts, and a hard ceiling after
//! which the failure is final.

mod config;
pub mod error;

use std::time::Duration;

use reqwest::Client;
use tracing::{instrument, warn};

pub use crate::config::FetchConfig;
use crate::error::{ErrorKind, Result};

const USER_AGENT: &str = concat!("emojicat/", env!("CARGO_PKG_VERSION"));

/// A retrying HTTP client for the chart pages.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    config: FetchConfig,
}

impl FetchClient {
    /// Builds a client from an explicit configuration. The configured
    /// timeout applies per attempt and doubles as the cancellation
    /// mechanism for in-flight requests.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout.max(Duration::from_millis(1)))
            .build()
            .map_err(ErrorKind::from)?;
        Ok(Self { client, config })
    }

    /// Fetches a page as text, retrying transient failures up to the
    /// configured ceiling with a fixed inter-attempt delay.
    ///
    /// Non-retryable failures (a plain 404, say) abort immediately; once
    /// the ceiling is spent the caller gets [`ErrorKind::Exhausted`].
    #[instrument(skip(self))]
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let attempts = self.config.attempts.max(1);
        for attempt in 1..=attempts {
            match self.attempt(url).await {
                Ok(body) => return Ok(body),
                Err(kind) if kind.is_retryable() => {
                    warn!(url, attempt, attempts, error = %kind, "fetch attempt failed");
                    if attempt < attempts {
                        tokio::time::sleep(self.config.delay).await;
                    }
                }
                Err(kind) => return Err(kind.into()),
            }
        }
        Err(ErrorKind::Exhausted { url: url.to_string(), attempts }.into())
    }

    async fn attempt(&self, url: &str) -> std::result::Result<String, ErrorKind> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ErrorKind::Status { code: status.as_u16(), url: url.to_string() });
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_config(attempts: u32) -> FetchConfig {
        FetchConfig { timeout: Duration::from_millis(250), attempts, delay: Duration::ZERO }
    }

    #[tokio::test]
    async fn exhausts_retries_against_unreachable_host() {
        // Nothing listens on the discard port; every attempt is refused,
        // which is a retryable network error.
        let client = FetchClient::new(instant_config(2)).unwrap();
        let err = client.get_text("http://127.0.0.1:9/emoji-counts.html").await.unwrap_err();
        assert!(matches!(*err, ErrorKind::Exhausted { attempts: 2, .. }));
    }

    #[tokio::test]
    async fn attempts_floor_is_one() {
        let client = FetchClient::new(instant_config(0)).unwrap();
        let err = client.get_text("http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(*err, ErrorKind::Exhausted { attempts: 1, .. }));
    }
}
