//! Outbound call to the chosen provider.
//!
//! One pooled HTTP client, one bounded request per inbound call, no retries:
//! a timeout or failure is surfaced immediately and the caller decides
//! whether to try again.

use crate::config::UpstreamConfig;
use crate::error::{RelayError, Result};
use crate::provider::{ChatCompletionRequest, ResolvedProvider};
use crate::utils::truncate;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

pub struct UpstreamClient {
    http_client: Client,
}

impl UpstreamClient {
    /// Create the shared HTTP client with the configured request timeout.
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .use_rustls_tls()
            .build()
            .map_err(|e| RelayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }

    /// POST the payload to the provider and return the parsed response body.
    ///
    /// Outcome classification:
    /// - request timeout → `UpstreamTimeout`
    /// - transport failure or non-2xx status → `UpstreamRequest` with detail
    /// - 2xx with a JSON body → `Ok(body)`
    pub async fn send_chat(
        &self,
        provider: &ResolvedProvider,
        payload: &ChatCompletionRequest,
    ) -> Result<Value> {
        debug!("Calling {} endpoint {}", provider.name, provider.endpoint);

        let response = self
            .http_client
            .post(&provider.endpoint)
            .header("Authorization", format!("Bearer {}", provider.api_key))
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(classify_transport_error)?;

        debug!(
            "Provider {} responded: HTTP {} - {}",
            provider.name,
            status,
            truncate(&body, 500)
        );

        if !status.is_success() {
            error!(
                "Provider {} request failed: HTTP {} - {}",
                provider.name,
                status,
                truncate(&body, 500)
            );
            return Err(RelayError::UpstreamRequest(format!(
                "HTTP {}: {}",
                status,
                truncate(&body, 500)
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            error!("Provider {} returned a non-JSON body: {}", provider.name, e);
            RelayError::UpstreamRequest(format!("invalid JSON response body: {}", e))
        })
    }
}

fn classify_transport_error(err: reqwest::Error) -> RelayError {
    if err.is_timeout() {
        RelayError::UpstreamTimeout
    } else {
        RelayError::UpstreamRequest(err.to_string())
    }
}

/// Extract the textual answer from a provider response.
///
/// If `choices[0].message.content` holds a string, that is the result.
/// Anything else is relayed as the stringified body rather than treated as
/// an error, so unexpected-but-successful upstream shapes still reach the
/// caller.
pub fn extract_result(raw: &Value) -> String {
    match raw.pointer("/choices/0/message/content").and_then(Value::as_str) {
        Some(content) => content.to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_from_choices_shape() {
        let raw = json!({
            "choices": [{"message": {"role": "assistant", "content": "a red car"}}],
            "usage": {"total_tokens": 42}
        });
        assert_eq!(extract_result(&raw), "a red car");
    }

    #[test]
    fn test_fallback_when_choices_missing() {
        let raw = json!({"output": "unexpected shape"});
        assert_eq!(extract_result(&raw), raw.to_string());
    }

    #[test]
    fn test_fallback_when_choices_empty() {
        let raw = json!({"choices": []});
        assert_eq!(extract_result(&raw), raw.to_string());
    }

    #[test]
    fn test_fallback_when_content_not_a_string() {
        let raw = json!({"choices": [{"message": {"content": {"parts": []}}}]});
        assert_eq!(extract_result(&raw), raw.to_string());
    }
}
