//! Trait abstractions at the transport boundary.
//!
//! # Traits
//!
//! - [`ResponseSink`] - outgoing response body with headers and flush
//! - [`CancelSignal`] - cooperative cancellation checked before each write

pub mod cancel;
pub mod sink;

pub use cancel::{CancelSignal, NeverCancel};
pub use sink::ResponseSink;
