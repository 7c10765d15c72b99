//! Step definitions for draft editing scenarios.

pub mod world;

mod given;
mod then;
mod when;
