//! Unit tests for the editor session.
