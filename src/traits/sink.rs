//! Response sink trait abstraction.
//!
//! The writer never talks to a socket or an HTTP framework directly. It
//! writes through a [`ResponseSink`], which lets the transport decide how
//! headers are sent and lets tests substitute an in-memory recorder.

use std::io;

/// An outgoing HTTP response body that events are written into.
///
/// Implementations carry exactly one response. Header calls are only
/// meaningful before the first body write.
pub trait ResponseSink {
    /// Record a response header. Later calls with the same name replace the
    /// earlier value.
    fn set_header(&mut self, name: &str, value: &str);

    /// Write the whole buffer to the response body.
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()>;

    /// Whether [`flush`](ResponseSink::flush) actually pushes bytes to the
    /// peer. A sink that returns `false` here is rejected by `SseWriter::new`.
    fn supports_flush(&self) -> bool;

    /// Push any buffered body bytes to the peer.
    fn flush(&mut self) -> io::Result<()>;
}

impl<S: ResponseSink + ?Sized> ResponseSink for &mut S {
    fn set_header(&mut self, name: &str, value: &str) {
        (**self).set_header(name, value)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        (**self).write_all(buf)
    }

    fn supports_flush(&self) -> bool {
        (**self).supports_flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

impl<S: ResponseSink + ?Sized> ResponseSink for Box<S> {
    fn set_header(&mut self, name: &str, value: &str) {
        (**self).set_header(name, value)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        (**self).write_all(buf)
    }

    fn supports_flush(&self) -> bool {
        (**self).supports_flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
