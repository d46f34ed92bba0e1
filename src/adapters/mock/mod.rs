//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockSink`] - Response sink that records headers, body bytes and flushes

pub mod sink;

pub use sink::MockSink;
