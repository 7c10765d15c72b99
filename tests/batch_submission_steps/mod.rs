//! Step definitions for batch submission scenarios.

pub mod world;

mod given;
mod then;
mod when;
