//! Recording response sink for tests.
//!
//! `MockSink` keeps everything written to it behind shared state, so a test
//! can hand one clone to an `SseWriter` and inspect the bytes through
//! another.

use std::io;
use std::sync::{Arc, Mutex};

use crate::traits::ResponseSink;

#[derive(Debug, Default)]
struct Recorded {
    headers: Vec<(String, String)>,
    body: Vec<u8>,
    writes: usize,
    flushes: usize,
    fail_writes: bool,
    fail_flush: bool,
}

/// In-memory [`ResponseSink`] that records headers, body bytes and calls.
///
/// # Example
///
/// ```ignore
/// use sse_wire::adapters::mock::MockSink;
/// use sse_wire::{NeverCancel, SseWriter};
///
/// let sink = MockSink::new();
/// let mut writer = SseWriter::new(sink.clone())?;
/// writer.write_data(&NeverCancel, b"hello")?;
///
/// assert_eq!(sink.body(), b"data:hello\n\n".to_vec());
/// assert_eq!(sink.flush_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockSink {
    state: Arc<Mutex<Recorded>>,
    flushable: bool,
}

impl MockSink {
    /// Create a flushable mock sink.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(Recorded::default())),
            flushable: true,
        }
    }

    /// Create a sink that reports no flush capability.
    pub fn without_flush() -> Self {
        Self {
            flushable: false,
            ..Self::new()
        }
    }

    /// Make every subsequent body write fail with `BrokenPipe`.
    pub fn fail_writes(&self, fail: bool) {
        self.state.lock().unwrap().fail_writes = fail;
    }

    /// Make every subsequent flush fail with `BrokenPipe`.
    pub fn fail_flush(&self, fail: bool) {
        self.state.lock().unwrap().fail_flush = fail;
    }

    /// All body bytes written so far.
    pub fn body(&self) -> Vec<u8> {
        self.state.lock().unwrap().body.clone()
    }

    /// Body bytes as (lossy) UTF-8, convenient for assertions.
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.state.lock().unwrap().body).into_owned()
    }

    /// Recorded headers, in the order they were first set.
    pub fn headers(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().headers.clone()
    }

    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.clone())
    }

    /// Number of successful body writes.
    pub fn write_count(&self) -> usize {
        self.state.lock().unwrap().writes
    }

    /// Number of successful flushes.
    pub fn flush_count(&self) -> usize {
        self.state.lock().unwrap().flushes
    }
}

impl Default for MockSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSink for MockSink {
    fn set_header(&mut self, name: &str, value: &str) {
        let mut state = self.state.lock().unwrap();
        match state
            .headers
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.1 = value.to_string(),
            None => state.headers.push((name.to_string(), value.to_string())),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "mock write failure"));
        }
        state.body.extend_from_slice(buf);
        state.writes += 1;
        Ok(())
    }

    fn supports_flush(&self) -> bool {
        self.flushable
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_flush {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "mock flush failure"));
        }
        state.flushes += 1;
        Ok(())
    }
}
