use std::time::Duration;

use reqwest::Client;

use crate::domain::{
    common::{PushConfig, entities::app_errors::CoreError},
    notification::{ports::PushClient, value_objects::PushMessage},
};

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Adapter for the push delivery gateway: one POST per message, bearer
/// authentication. Subscription management lives in the gateway.
#[derive(Debug, Clone)]
pub struct HttpPushClient {
    gateway_url: String,
    api_token: String,
    client: Client,
}

impl HttpPushClient {
    pub fn new(config: PushConfig) -> Self {
        Self {
            gateway_url: config.gateway_url,
            api_token: config.api_token,
            client: Client::new(),
        }
    }
}

impl PushClient for HttpPushClient {
    async fn send(&self, message: PushMessage) -> Result<(), CoreError> {
        let response = self
            .client
            .post(&self.gateway_url)
            .timeout(SEND_TIMEOUT)
            .bearer_auth(&self.api_token)
            .json(&message)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("push gateway request failed: {}", e);
                CoreError::ExternalService(format!("push gateway request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("push gateway returned {}: {}", status, error_text);
            return Err(CoreError::ExternalService(format!(
                "push gateway returned error: {} - {}",
                status, error_text
            )));
        }

        Ok(())
    }
}
