//! SSE (Server-Sent Events) wire framing.
//!
//! SSE format handled here:
//! - `data: <payload line>` - one line of an event's payload
//! - Empty line - signals end of event
//! - Lines starting with `:` - comments, used for keep-alives (ignored)
//!
//! # Module structure
//! - `frame` - wire constants, line classification and frame encoding
//! - `writer` - `SseWriter`, the flushing event producer
//! - `parser` - `SseParser` plus blocking and async stream drivers

pub mod frame;
mod parser;
mod writer;

pub use frame::{classify_line, FrameLine, CONTENT_EVENT_STREAM};
pub use parser::{parse_byte_stream, parse_data_stream, parse_data_stream_with, DataStream, SseParser};
pub use writer::SseWriter;
