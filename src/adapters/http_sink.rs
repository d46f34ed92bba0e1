//! Raw HTTP/1.1 response adapter.
//!
//! For blocking servers that hand the handler a raw connection (for example
//! after taking the socket out of the request), this sink writes the status
//! line and the recorded headers in front of the first body byte. The body
//! is close-delimited: the response ends when the connection is closed.

use std::io::{self, Write};

use tracing::debug;

use crate::traits::ResponseSink;

/// A [`ResponseSink`] that frames the response head itself.
#[derive(Debug)]
pub struct HttpResponseSink<W> {
    inner: W,
    headers: Vec<(String, String)>,
    head_sent: bool,
}

impl<W: Write> HttpResponseSink<W> {
    /// Wrap a raw connection. Nothing is written until the first body write
    /// or flush.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            headers: Vec::new(),
            head_sent: false,
        }
    }

    /// Whether the status line and headers have been written.
    pub fn head_sent(&self) -> bool {
        self.head_sent
    }

    /// Get a reference to the wrapped connection.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the connection.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn send_head(&mut self) -> io::Result<()> {
        if self.head_sent {
            return Ok(());
        }

        let mut head = String::from("HTTP/1.1 200 OK\r\n");
        for (name, value) in &self.headers {
            head.push_str(name);
            head.push_str(": ");
            head.push_str(value);
            head.push_str("\r\n");
        }
        head.push_str("\r\n");

        self.inner.write_all(head.as_bytes())?;
        self.head_sent = true;
        debug!(headers = self.headers.len(), "sent HTTP response head");
        Ok(())
    }
}

impl<W: Write> ResponseSink for HttpResponseSink<W> {
    fn set_header(&mut self, name: &str, value: &str) {
        if self.head_sent {
            // Too late; the head is already on the wire.
            return;
        }
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
        self.send_head()?;
        self.inner.write_all(buf)
    }

    fn supports_flush(&self) -> bool {
        true
    }

    fn flush(&mut self) -> io::Result<()> {
        self.send_head()?;
        self.inner.flush()
    }
}
