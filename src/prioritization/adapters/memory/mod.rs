//! In-memory prioritization service for tests and offline use.
//!
//! Mirrors the remote service's documented behaviour: per-field validation,
//! the ranking formula, and storage of ranked tasks for the listing endpoint.

mod scoring;
mod service;
mod validation;

pub use scoring::{PriorityCalculator, PriorityCategory};
pub use service::{InMemoryPrioritizationService, ServiceMode};
pub use validation::{ValidTask, validate_task};
