//! Batch submission to the remote prioritization service.
//!
//! The service ranks valid tasks and reports per-task validation failures in
//! the same response. This module keeps those two outcomes apart from
//! whole-batch failures (transport errors and rejected requests). It follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
