//! sse-wire - Server-Sent Events wire framing
//!
//! An [`SseWriter`] serializes payloads into `data:` events over any
//! [`ResponseSink`], flushing after each one. [`parse_data_stream`] (blocking)
//! and [`parse_byte_stream`] (async) turn the byte stream back into the exact
//! original payloads, skipping keep-alive comments.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod sse;
pub mod traits;

pub use adapters::{HttpResponseSink, IoSink};
pub use config::{Config, ParserConfig, WriterConfig};
pub use error::{SseError, SseResult};
pub use sse::{
    parse_byte_stream, parse_data_stream, parse_data_stream_with, DataStream, SseParser, SseWriter,
    CONTENT_EVENT_STREAM,
};
pub use traits::{CancelSignal, NeverCancel, ResponseSink};
