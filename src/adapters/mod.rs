//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`IoSink`] - any `std::io::Write` as a response sink (headers recorded only)
//! - [`HttpResponseSink`] - raw HTTP/1.1 connection; writes the response head itself
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockSink`] - recording sink with failure injection

pub mod http_sink;
pub mod io_sink;
pub mod mock;

pub use http_sink::HttpResponseSink;
pub use io_sink::IoSink;
pub use mock::MockSink;
