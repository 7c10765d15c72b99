//! Unit tests for view models and rendering.
