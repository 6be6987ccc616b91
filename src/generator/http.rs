//! JSON-over-HTTP adapter for the generation service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::HttpServiceConfig;
use crate::error::{ForgeError, GenerationFailure, Result};
use crate::utils::truncate_with_marker;

use super::service::{ContentGenerationService, GenerationRequest, GenerationResponse};

/// Cap on error bodies quoted in failure messages.
const MAX_ERROR_BODY_BYTES: usize = 200;

/// Posts generation requests to a configured endpoint. Transport errors,
/// non-success statuses, and undecodable bodies are classified into the
/// recoverable failure tier; only construction can fail fatally.
pub struct HttpContentService {
    client: Client,
    endpoint: String,
    connect_timeout_secs: u64,
}

impl HttpContentService {
    pub fn new(config: &HttpServiceConfig) -> Result<Self> {
        if config.endpoint.trim().is_empty() {
            return Err(ForgeError::Service(
                "generation service endpoint is not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| ForgeError::Service(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            connect_timeout_secs: config.connect_timeout_secs,
        })
    }
}

#[async_trait]
impl ContentGenerationService for HttpContentService {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> std::result::Result<GenerationResponse, GenerationFailure> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationFailure::Timeout {
                        elapsed_secs: self.connect_timeout_secs,
                    }
                } else {
                    GenerationFailure::Service {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationFailure::Service {
                message: format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    truncate_with_marker(&body, MAX_ERROR_BODY_BYTES)
                ),
            });
        }

        let generated: GenerationResponse =
            response
                .json()
                .await
                .map_err(|e| GenerationFailure::MalformedResponse {
                    reason: e.to_string(),
                })?;

        debug!(
            model = %generated.metadata.model,
            html_bytes = generated.html_content.len(),
            "Received generated page"
        );

        Ok(generated)
    }
}
