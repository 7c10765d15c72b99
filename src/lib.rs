//! Taskrank: a task-draft editor that submits batches for prioritization.
//!
//! Users fill in task drafts (title, deadline, effort and importance), submit
//! them in a single batch to a remote prioritization service, and review the
//! ranked tasks next to the ones the service rejected.
//!
//! # Architecture
//!
//! Taskrank follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`draft`]: Draft editing and payload normalization
//! - [`editor`]: Session state shown to the user
//! - [`prioritization`]: Batch submission and response reconciliation
//! - [`view`]: Display-ready view models and text rendering
//! - [`config`]: Service endpoint configuration

pub mod config;
pub mod draft;
pub mod editor;
pub mod prioritization;
pub mod view;
