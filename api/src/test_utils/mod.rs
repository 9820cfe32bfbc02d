//! Test utilities
//!
//! In-memory repository implementations and test fixtures for unit testing.
//!
//! The service ports are mocked with `mockall` (`MockAnimalService`,
//! `MockStateService`) so resolver tests can set call expectations.
//! Repositories get hand-written in-memory doubles instead, which let the
//! service tests seed rows and inject failures without expectation setup.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
