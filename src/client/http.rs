use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::client::error::ClientError;
use crate::client::CounterRemote;
use crate::config::ClientConfig;
use crate::rpc::{ErrorEnvelope, UpdateCounterInput, GET_COUNTER_PATH, HEALTH_PATH, UPDATE_COUNTER_PATH};
use crate::server::HealthStatus;
use crate::store::{CounterAction, CounterRecord};

/// reqwest-backed client for the counter RPC endpoints.
#[derive(Debug, Clone)]
pub struct HttpCounterClient {
    client: Client,
    base_url: String,
}

impl HttpCounterClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let response = self.client.get(self.url(HEALTH_PATH)).send().await?;
        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl CounterRemote for HttpCounterClient {
    async fn get_counter(&self) -> Result<CounterRecord, ClientError> {
        let response = self.client.get(self.url(GET_COUNTER_PATH)).send().await?;
        decode(response).await
    }

    async fn update_counter(&self, action: CounterAction) -> Result<CounterRecord, ClientError> {
        let response = self
            .client
            .post(self.url(UPDATE_COUNTER_PATH))
            .json(&UpdateCounterInput { action })
            .send()
            .await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.bytes().await?;

    if status.is_success() {
        return Ok(serde_json::from_slice(&body)?);
    }

    let err = match serde_json::from_slice::<ErrorEnvelope>(&body) {
        Ok(envelope) => ClientError::Server {
            status: status.as_u16(),
            error_type: envelope.error.error_type,
            message: envelope.error.message,
        },
        Err(_) => ClientError::Server {
            status: status.as_u16(),
            error_type: "unknown".to_string(),
            message: String::from_utf8_lossy(&body).into_owned(),
        },
    };
    Err(err)
}
