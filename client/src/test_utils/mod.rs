//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The in-memory API implements every port so services can be wired exactly
//! as they are in production, with failures and latency injected per test.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
