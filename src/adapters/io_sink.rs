//! `std::io::Write` adapter.
//!
//! Wraps any writer as a [`ResponseSink`]. Headers are recorded but never
//! written, which suits stdout, pipes and transports that send their own
//! response head.

use std::io::{self, Write};

use crate::traits::ResponseSink;

/// A flushable sink over any [`Write`].
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
    headers: Vec<(String, String)>,
}

impl<W: Write> IoSink<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            headers: Vec::new(),
        }
    }

    /// Headers recorded through [`ResponseSink::set_header`].
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Get a reference to the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ResponseSink for IoSink<W> {
    fn set_header(&mut self, name: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.1 = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.write_all(buf)
    }

    fn supports_flush(&self) -> bool {
        true
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
