//! Adapter implementations for the prioritization service port.

pub mod http;
pub mod memory;
