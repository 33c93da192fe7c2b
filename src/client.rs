// HTTP client for the downstream certificate API
// One token acquisition plus one resource call per job invocation; tokens
// are never cached across invocations.

use crate::config::ApiConfig;
use crate::errors::ExecutionError;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

const API_VERSION_HEADER: &str = "x-api-version";
const API_VERSION: &str = "1";
const REQUESTED_WITH_HEADER: &str = "x-requested-with";
const REQUESTED_WITH: &str = "APIClient";

/// ApiClient issues the two outbound calls of the API-updating job variant:
/// a client-credentials token grant and a single resource PUT.
pub struct ApiClient {
    client: Client,
    settings: ApiConfig,
}

impl ApiClient {
    /// Create a new ApiClient with the configured request timeout
    pub fn new(settings: ApiConfig) -> Result<Self, ExecutionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| {
                ExecutionError::HttpRequestFailed(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, settings })
    }

    /// Acquire a bearer token via the client-credentials grant
    #[tracing::instrument(skip(self))]
    pub async fn acquire_token(&self) -> Result<String, ExecutionError> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.settings.client_id.as_str()),
            ("client_secret", self.settings.client_secret.as_str()),
        ];

        let response = self
            .client
            .post(&self.settings.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                ExecutionError::TokenRequestFailed(format!("token request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ExecutionError::TokenRequestFailed(format!(
                "token endpoint returned status {}: {}",
                status, body
            )));
        }

        let token_response: serde_json::Value = response.json().await.map_err(|e| {
            ExecutionError::MalformedResponse(format!("failed to parse token response: {}", e))
        })?;

        token_response
            .get("access_token")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| {
                ExecutionError::MalformedResponse(
                    "token response missing access_token field".to_string(),
                )
            })
    }

    /// Update the downstream resource for the given correlation id.
    ///
    /// Acquires a fresh token, then sends the resource PUT with bearer auth
    /// and the fixed API headers. Returns the raw response body on any 2xx
    /// status; a non-2xx status is a hard failure embedding status and body.
    #[tracing::instrument(skip(self))]
    pub async fn update_resource(&self, correlation_id: &str) -> Result<String, ExecutionError> {
        let token = self.acquire_token().await?;

        let payload = json!({
            "Id": 4,
            "Metadata": {
                "Propietario": correlation_id,
            },
        });

        tracing::debug!(url = %self.settings.resource_url, "sending resource update");

        let response = self
            .client
            .put(&self.settings.resource_url)
            .bearer_auth(token)
            .header(API_VERSION_HEADER, API_VERSION)
            .header(REQUESTED_WITH_HEADER, REQUESTED_WITH)
            .header(ACCEPT, "*/*")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                ExecutionError::HttpRequestFailed(format!("resource request failed: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ExecutionError::MalformedResponse(format!("failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            return Err(ExecutionError::ApiRequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(status = status.as_u16(), "resource update accepted");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_api_client_creation() {
        let client = ApiClient::new(Settings::default().api);
        assert!(client.is_ok());
    }
}
