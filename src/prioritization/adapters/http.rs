//! HTTP adapter for the prioritization service.

use async_trait::async_trait;
use reqwest::{Client, header::ACCEPT};
use tracing::debug;

use crate::config::ClientConfig;
use crate::draft::domain::NormalizedPayload;
use crate::prioritization::ports::{
    Endpoint, PrioritizationService, ServiceResponse, TransportError, TransportResult,
};

/// Talks to the prioritization service over HTTP with JSON bodies.
///
/// Applies the configured timeout, if any, and nothing else: no retries, no
/// status handling.
#[derive(Debug, Clone)]
pub struct HttpPrioritizationService {
    client: Client,
    config: ClientConfig,
}

impl HttpPrioritizationService {
    /// Creates an adapter for the configured service.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> TransportResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| TransportError::from_error(&err))?;
        Ok(Self { client, config })
    }

    /// Returns the configuration the adapter was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn post_batch(
        &self,
        endpoint: Endpoint,
        batch: &[NormalizedPayload],
    ) -> TransportResult<ServiceResponse> {
        let url = self
            .config
            .endpoint(endpoint)
            .map_err(|err| TransportError::from_error(&err))?;
        debug!(%url, tasks = batch.len(), "posting batch");
        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(batch)
            .send()
            .await
            .map_err(|err| TransportError::from_error(&err))?;
        read_response(response).await
    }

    async fn get(&self, endpoint: Endpoint) -> TransportResult<ServiceResponse> {
        let url = self
            .config
            .endpoint(endpoint)
            .map_err(|err| TransportError::from_error(&err))?;
        debug!(%url, "fetching");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| TransportError::from_error(&err))?;
        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> TransportResult<ServiceResponse> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|err| TransportError::from_error(&err))?;
    debug!(status, bytes = body.len(), "response received");
    Ok(ServiceResponse::new(status, body))
}

#[async_trait]
impl PrioritizationService for HttpPrioritizationService {
    async fn prioritize(&self, batch: Vec<NormalizedPayload>) -> TransportResult<ServiceResponse> {
        self.post_batch(Endpoint::Prioritize, &batch).await
    }

    async fn validate(&self, batch: Vec<NormalizedPayload>) -> TransportResult<ServiceResponse> {
        self.post_batch(Endpoint::Validate, &batch).await
    }

    async fn list_tasks(&self) -> TransportResult<ServiceResponse> {
        self.get(Endpoint::ListTasks).await
    }

    async fn health(&self) -> TransportResult<ServiceResponse> {
        self.get(Endpoint::Health).await
    }
}
