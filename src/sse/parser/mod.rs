//! SSE data-stream parsing.
//!
//! [`SseParser`] is the line-level state machine: feed it lines, get back
//! complete payloads. [`parse_data_stream`] drives it from a blocking reader
//! and [`parse_byte_stream`] from an async byte stream; both share the same
//! line ceiling and end-of-stream rules.

mod async_stream;
mod lines;
mod stream;

pub use async_stream::parse_byte_stream;
pub use stream::{parse_data_stream, parse_data_stream_with, DataStream};

use bytes::{Bytes, BytesMut};
use tracing::trace;

use crate::sse::frame::{classify_line, FrameLine};

/// Stateful parser that accumulates `data:` lines and emits complete
/// payloads on blank lines.
///
/// Only one event's lines are held at a time. Comment lines and fields other
/// than `data` are skipped.
#[derive(Debug, Default)]
pub struct SseParser {
    /// Joined data lines of the current event.
    data: BytesMut,
    /// Whether the current event has at least one data line. Needed because
    /// a single empty `data:` line is still an event.
    has_data: bool,
}

impl SseParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line (without its `\n`).
    ///
    /// Returns `Some(payload)` when the line is a blank line closing an event
    /// that carried data.
    pub fn feed_line(&mut self, line: &[u8]) -> Option<Bytes> {
        match classify_line(line) {
            FrameLine::Data(value) => {
                if self.has_data {
                    self.data.extend_from_slice(b"\n");
                }
                self.data.extend_from_slice(value);
                self.has_data = true;
                None
            }
            FrameLine::Blank => self.take_event(),
            FrameLine::Comment(_) | FrameLine::Other(_) => None,
        }
    }

    /// Signal end of stream. Returns the pending payload of an event whose
    /// terminating blank line never arrived.
    pub fn finish(&mut self) -> Option<Bytes> {
        let event = self.take_event();
        if let Some(payload) = &event {
            trace!(bytes = payload.len(), "stream ended mid-event; emitting partial event");
        }
        event
    }

    /// Whether data lines are waiting for a blank line.
    pub fn has_pending(&self) -> bool {
        self.has_data
    }

    /// Drop any partially accumulated event.
    pub fn reset(&mut self) {
        self.data.clear();
        self.has_data = false;
    }

    fn take_event(&mut self) -> Option<Bytes> {
        if !self.has_data {
            return None;
        }
        self.has_data = false;
        let payload = self.data.split().freeze();
        trace!(bytes = payload.len(), "parsed SSE data event");
        Some(payload)
    }
}
