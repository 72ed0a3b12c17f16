//! Integration test utilities for the audit log decoder
//!
//! Provides synthetic audit log pages covering every action kind and helpers
//! for decoding them end to end.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
