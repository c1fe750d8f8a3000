//! Backend test support utilities
//!
//! Shared helpers for the wordle backend's integration test binaries:
//! one-time logging initialization and RFC 7807 response assertions.

pub mod logging;
pub mod problem_details;
