//! reqwest-backed feedback gateway

use async_trait::async_trait;
use feedback_application::{EndpointConfig, FeedbackGateway, GatewayError, GatewayResponse};
use feedback_domain::FeedbackSubmission;
use tracing::debug;

/// Posts submissions as JSON to `{base_url}{path}`.
///
/// `reqwest`'s `.json()` sets `Content-Type: application/json`. The client
/// timeout covers the whole exchange including reading the body.
pub struct HttpFeedbackGateway {
    client: reqwest::Client,
    config: EndpointConfig,
}

impl HttpFeedbackGateway {
    pub fn new(config: EndpointConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("feedback-form/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::RequestFailed(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }
}

#[async_trait]
impl FeedbackGateway for HttpFeedbackGateway {
    async fn submit(
        &self,
        submission: &FeedbackSubmission,
    ) -> Result<GatewayResponse, GatewayError> {
        let url = self.config.url();
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(submission)
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify_error)?;
        debug!("Response {} ({} bytes)", status, body.len());

        Ok(GatewayResponse::new(status, body))
    }

    fn endpoint(&self) -> String {
        self.config.url()
    }
}

fn classify_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_builder() {
        GatewayError::InvalidEndpoint(e.to_string())
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}
