//! Port contracts for the prioritization service.
//!
//! Ports define transport-agnostic interfaces used by submission services.

pub mod service;

#[cfg(test)]
pub use service::MockPrioritizationService;
pub use service::{Endpoint, PrioritizationService, ServiceResponse, TransportError, TransportResult};
