//! Unit tests for the draft module.

mod collection_tests;
mod payload_tests;
