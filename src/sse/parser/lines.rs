//! Line splitting with an optional length ceiling.
//!
//! Lines accumulate in a growable buffer, so a single `data:` line may be far
//! longer than the read buffer. When a ceiling is configured the reader fails
//! with `LineTooLong` as soon as a line passes it, without buffering the rest.

use std::io::{self, BufRead};

use bytes::{Buf, BytesMut};

use crate::error::{SseError, SseResult};

/// Reads `\n`-terminated lines from a blocking source.
#[derive(Debug)]
pub(crate) struct LineReader<R> {
    inner: R,
    line: Vec<u8>,
    max_line_bytes: Option<usize>,
}

impl<R: BufRead> LineReader<R> {
    pub(crate) fn new(inner: R, max_line_bytes: Option<usize>) -> Self {
        Self {
            inner,
            line: Vec::new(),
            max_line_bytes,
        }
    }

    /// Next line without its `\n`, or `None` at end of stream. A final line
    /// with no terminator is still returned.
    pub(crate) fn next_line(&mut self) -> SseResult<Option<&[u8]>> {
        self.line.clear();
        loop {
            let available = match self.inner.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            if available.is_empty() {
                return Ok(if self.line.is_empty() {
                    None
                } else {
                    Some(&self.line)
                });
            }

            let (content, used, complete) = match available.iter().position(|&b| b == b'\n') {
                Some(i) => (i, i + 1, true),
                None => (available.len(), available.len(), false),
            };

            if let Some(limit) = self.max_line_bytes {
                if self.line.len() + content > limit {
                    return Err(SseError::LineTooLong { limit });
                }
            }

            self.line.extend_from_slice(&available[..content]);
            self.inner.consume(used);

            if complete {
                return Ok(Some(&self.line));
            }
        }
    }

    pub(crate) fn get_ref(&self) -> &R {
        &self.inner
    }

    pub(crate) fn into_inner(self) -> R {
        self.inner
    }
}

/// Splits lines out of chunks pushed from an async byte stream.
#[derive(Debug, Default)]
pub(crate) struct LineBuffer {
    pending: BytesMut,
    /// Prefix of `pending` already known to contain no `\n`.
    scanned: usize,
    max_line_bytes: Option<usize>,
}

impl LineBuffer {
    pub(crate) fn new(max_line_bytes: Option<usize>) -> Self {
        Self {
            pending: BytesMut::new(),
            scanned: 0,
            max_line_bytes,
        }
    }

    pub(crate) fn push(&mut self, chunk: &[u8]) {
        self.pending.extend_from_slice(chunk);
    }

    /// Next complete line without its `\n`, or `None` if more bytes are
    /// needed.
    pub(crate) fn next_line(&mut self) -> SseResult<Option<BytesMut>> {
        let found = self.pending[self.scanned..]
            .iter()
            .position(|&b| b == b'\n')
            .map(|i| self.scanned + i);

        match found {
            Some(end) => {
                self.check_len(end)?;
                let line = self.pending.split_to(end);
                self.pending.advance(1);
                self.scanned = 0;
                Ok(Some(line))
            }
            None => {
                self.check_len(self.pending.len())?;
                self.scanned = self.pending.len();
                Ok(None)
            }
        }
    }

    /// Whatever is left once the stream has ended: an unterminated last line.
    pub(crate) fn take_remainder(&mut self) -> SseResult<Option<BytesMut>> {
        self.scanned = 0;
        if self.pending.is_empty() {
            return Ok(None);
        }
        self.check_len(self.pending.len())?;
        Ok(Some(self.pending.split()))
    }

    fn check_len(&self, len: usize) -> SseResult<()> {
        match self.max_line_bytes {
            Some(limit) if len > limit => Err(SseError::LineTooLong { limit }),
            _ => Ok(()),
        }
    }
}
