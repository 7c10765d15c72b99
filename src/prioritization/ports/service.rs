//! Service port for the remote prioritization collaborator.

use crate::draft::domain::NormalizedPayload;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Result type for transport-level operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Prioritization service contract.
///
/// Implementations only move bytes: every call that reaches the service
/// returns its status and body untouched, and interpretation happens in the
/// submission service. One call issues exactly one request, with no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrioritizationService: Send + Sync {
    /// Sends a batch to be validated and ranked.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request cannot be completed.
    async fn prioritize(&self, batch: Vec<NormalizedPayload>) -> TransportResult<ServiceResponse>;

    /// Sends a batch for validation only.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request cannot be completed.
    async fn validate(&self, batch: Vec<NormalizedPayload>) -> TransportResult<ServiceResponse>;

    /// Fetches the tasks the service has prioritized so far.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request cannot be completed.
    async fn list_tasks(&self) -> TransportResult<ServiceResponse>;

    /// Queries the service health check.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request cannot be completed.
    async fn health(&self) -> TransportResult<ServiceResponse>;
}

/// Endpoints exposed by the prioritization service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `POST tasks/prioritize/`
    Prioritize,
    /// `POST tasks/validate/`
    Validate,
    /// `GET tasks/`
    ListTasks,
    /// `GET health/`
    Health,
}

impl Endpoint {
    /// Returns the path relative to the service base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Prioritize => "tasks/prioritize/",
            Self::Validate => "tasks/validate/",
            Self::ListTasks => "tasks/",
            Self::Health => "health/",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Raw response of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse {
    status: u16,
    body: String,
}

impl ServiceResponse {
    /// Creates a response from a status code and body text.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the body text, possibly empty.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// The request could not be completed at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    /// Creates a transport error carrying the failure description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Wraps any error, joining its display text with that of its sources.
    #[must_use]
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        Self::new(message)
    }

    /// Returns the failure description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
