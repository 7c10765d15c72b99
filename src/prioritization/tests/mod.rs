//! Unit tests for the prioritization module.

mod validation_tests;
