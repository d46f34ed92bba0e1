//! SSE event writer.
//!
//! Turns payloads into `data:` events on a [`ResponseSink`], flushing after
//! each event so it reaches the peer immediately instead of waiting in a
//! transport buffer.

use tracing::{debug, trace};

use crate::config::WriterConfig;
use crate::error::{SseError, SseResult};
use crate::sse::frame::{self, STREAM_HEADERS};
use crate::traits::{CancelSignal, ResponseSink};

/// Writes SSE frames to a single response.
///
/// Methods take `&mut self`; a writer shared between tasks needs external
/// serialization. There is no close operation: the transport owns the
/// connection, and [`into_inner`](SseWriter::into_inner) hands the sink back.
///
/// # Example
///
/// ```ignore
/// use sse_wire::{IoSink, NeverCancel, SseWriter};
///
/// let mut writer = SseWriter::new(IoSink::new(std::io::stdout()))?;
/// writer.write_headers();
/// writer.write_data(&NeverCancel, b"line one\nline two")?;
/// writer.write_keep_alive(&NeverCancel)?;
/// ```
#[derive(Debug)]
pub struct SseWriter<S> {
    sink: S,
    config: WriterConfig,
    /// Reused frame buffer so each event goes out in one sink write.
    frame: Vec<u8>,
}

impl<S: ResponseSink> SseWriter<S> {
    /// Create a writer with the default configuration.
    ///
    /// Fails with [`SseError::Capability`] if the sink cannot flush.
    pub fn new(sink: S) -> SseResult<Self> {
        Self::with_config(sink, WriterConfig::default())
    }

    /// Create a writer with an explicit configuration.
    pub fn with_config(sink: S, config: WriterConfig) -> SseResult<Self> {
        if !sink.supports_flush() {
            return Err(SseError::Capability);
        }
        config.validate()?;
        debug!(marker = %config.keep_alive_marker, "created SSE writer");
        Ok(Self {
            sink,
            config,
            frame: Vec::new(),
        })
    }

    /// Set the event-stream content type and the headers that keep
    /// intermediaries from caching or buffering the body.
    ///
    /// Call exactly once, before the first event.
    pub fn write_headers(&mut self) {
        for (name, value) in STREAM_HEADERS {
            self.sink.set_header(name, value);
        }
        debug!("set SSE response headers");
    }

    /// Write `payload` as one event and flush.
    ///
    /// `cancel` is checked before anything is written; a triggered signal
    /// returns [`SseError::Canceled`] with the sink untouched. After an
    /// [`SseError::Io`] the stream must be treated as broken.
    pub fn write_data<C>(&mut self, cancel: &C, payload: &[u8]) -> SseResult<()>
    where
        C: CancelSignal + ?Sized,
    {
        if cancel.is_cancelled() {
            return Err(SseError::Canceled);
        }

        self.frame.clear();
        frame::encode_data(payload, &mut self.frame);
        self.emit()?;
        trace!(payload_bytes = payload.len(), "wrote SSE data event");
        Ok(())
    }

    /// Write a keep-alive comment and flush. The parser yields nothing for
    /// it. Cancellation behaves as in [`write_data`](SseWriter::write_data).
    pub fn write_keep_alive<C>(&mut self, cancel: &C) -> SseResult<()>
    where
        C: CancelSignal + ?Sized,
    {
        if cancel.is_cancelled() {
            return Err(SseError::Canceled);
        }

        self.frame.clear();
        frame::encode_keep_alive(&self.config.keep_alive_marker, &mut self.frame);
        self.emit()?;
        trace!("wrote SSE keep-alive");
        Ok(())
    }

    fn emit(&mut self) -> SseResult<()> {
        self.sink.write_all(&self.frame)?;
        self.sink.flush()?;
        Ok(())
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Get a reference to the underlying sink.
    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    /// Recover the underlying sink.
    pub fn into_inner(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockSink;
    use crate::adapters::IoSink;
    use crate::traits::NeverCancel;
    use std::sync::atomic::AtomicBool;
    use tokio_util::sync::CancellationToken;

    fn writer() -> (SseWriter<MockSink>, MockSink) {
        let sink = MockSink::new();
        (SseWriter::new(sink.clone()).unwrap(), sink)
    }

    #[test]
    fn test_new_rejects_unflushable_sink() {
        let result = SseWriter::new(MockSink::without_flush());
        assert!(matches!(result, Err(SseError::Capability)));
    }

    #[test]
    fn test_with_config_validates() {
        let config = WriterConfig {
            keep_alive_marker: "a\nb".to_string(),
        };
        let result = SseWriter::with_config(MockSink::new(), config);
        assert!(matches!(result, Err(SseError::InvalidConfig(_))));
    }

    #[test]
    fn test_write_headers() {
        let (mut writer, sink) = writer();
        writer.write_headers();

        assert_eq!(sink.header("Content-Type").as_deref(), Some("text/event-stream"));
        assert_eq!(sink.header("Cache-Control").as_deref(), Some("no-cache"));
        assert_eq!(sink.header("Connection").as_deref(), Some("keep-alive"));
        assert_eq!(sink.header("X-Accel-Buffering").as_deref(), Some("no"));
        assert!(sink.body().is_empty());
    }

    #[test]
    fn test_write_data_single_write_then_flush() {
        let (mut writer, sink) = writer();
        writer.write_data(&NeverCancel, b"hello 0").unwrap();

        assert_eq!(sink.body_string(), "data:hello 0\n\n");
        assert_eq!(sink.write_count(), 1);
        assert_eq!(sink.flush_count(), 1);
    }

    #[test]
    fn test_write_data_multi_line() {
        let (mut writer, sink) = writer();
        writer.write_data(&NeverCancel, b"first\nsecond\n").unwrap();

        assert_eq!(sink.body_string(), "data:first\ndata:second\ndata:\n\n");
    }

    #[test]
    fn test_write_keep_alive() {
        let (mut writer, sink) = writer();
        writer.write_keep_alive(&NeverCancel).unwrap();

        assert_eq!(sink.body_string(), ": keep-alive\n\n");
        assert_eq!(sink.flush_count(), 1);
    }

    #[test]
    fn test_custom_keep_alive_marker() {
        let sink = MockSink::new();
        let config = WriterConfig {
            keep_alive_marker: "ping".to_string(),
        };
        let mut writer = SseWriter::with_config(sink.clone(), config).unwrap();
        writer.write_keep_alive(&NeverCancel).unwrap();

        assert_eq!(sink.body_string(), ": ping\n\n");
    }

    #[test]
    fn test_canceled_write_data_writes_nothing() {
        let (mut writer, sink) = writer();
        let token = CancellationToken::new();
        token.cancel();

        let result = writer.write_data(&token, b"never sent");
        assert!(matches!(result, Err(SseError::Canceled)));
        assert!(sink.body().is_empty());
        assert_eq!(sink.flush_count(), 0);
    }

    #[test]
    fn test_canceled_keep_alive_writes_nothing() {
        let (mut writer, sink) = writer();
        let flag = AtomicBool::new(true);

        let result = writer.write_keep_alive(&flag);
        assert!(matches!(result, Err(SseError::Canceled)));
        assert_eq!(sink.write_count(), 0);
    }

    #[test]
    fn test_cancel_after_some_events() {
        let (mut writer, sink) = writer();
        let token = CancellationToken::new();

        writer.write_data(&token, b"one").unwrap();
        token.cancel();
        assert!(writer.write_data(&token, b"two").is_err());

        assert_eq!(sink.body_string(), "data:one\n\n");
    }

    #[test]
    fn test_dyn_cancel_signal() {
        let (mut writer, _sink) = writer();
        let signal: &dyn CancelSignal = &NeverCancel;
        writer.write_data(signal, b"x").unwrap();
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let (mut writer, sink) = writer();
        sink.fail_writes(true);

        let err = writer.write_data(&NeverCancel, b"x").unwrap_err();
        assert!(matches!(err, SseError::Io(_)));
        assert!(err.is_fatal());
        assert_eq!(sink.flush_count(), 0);
    }

    #[test]
    fn test_flush_failure_is_io_error() {
        let (mut writer, sink) = writer();
        sink.fail_flush(true);

        let err = writer.write_keep_alive(&NeverCancel).unwrap_err();
        assert!(matches!(err, SseError::Io(_)));
    }

    #[test]
    fn test_into_inner_returns_sink() {
        let mut writer = SseWriter::new(IoSink::new(Vec::new())).unwrap();
        writer.write_data(&NeverCancel, b"a").unwrap();
        writer.write_keep_alive(&NeverCancel).unwrap();

        assert_eq!(writer.get_ref().get_ref().len(), 22);
        let bytes = writer.into_inner().into_inner();
        assert_eq!(bytes, b"data:a\n\n: keep-alive\n\n".to_vec());
    }
}
