//! Integration test utilities for the fleet registry
//!
//! Spawns the real HTTP server on a loopback port with the in-memory
//! backend and drives it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
