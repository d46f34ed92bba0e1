//! Blocking, pull-based data-stream parser.

use std::io::{BufReader, Read};
use std::iter::FusedIterator;

use bytes::Bytes;

use super::lines::LineReader;
use super::SseParser;
use crate::config::ParserConfig;
use crate::error::SseResult;

/// Parse `source` with the default configuration.
///
/// Nothing is read until the returned iterator is advanced. Each item is one
/// event's payload; a read error or an over-long line is yielded once as the
/// last item. Keep-alive comments produce no items.
///
/// # Example
///
/// ```ignore
/// use sse_wire::parse_data_stream;
///
/// for event in parse_data_stream(response_body) {
///     let payload = event?;
///     handle(&payload);
/// }
/// ```
pub fn parse_data_stream<R: Read>(source: R) -> DataStream<R> {
    DataStream::new(source, &ParserConfig::default())
}

/// Parse `source` with an explicit line ceiling and read buffer size.
pub fn parse_data_stream_with<R: Read>(source: R, config: &ParserConfig) -> DataStream<R> {
    DataStream::new(source, config)
}

/// Lazy, single-pass iterator over the payloads of an SSE stream.
///
/// Dropping it drops the source; [`into_inner`](DataStream::into_inner)
/// returns it instead. Once it returns `None` or an error it stays finished.
#[derive(Debug)]
pub struct DataStream<R> {
    lines: LineReader<BufReader<R>>,
    parser: SseParser,
    finished: bool,
}

impl<R: Read> DataStream<R> {
    fn new(source: R, config: &ParserConfig) -> Self {
        let capacity = config.read_buffer_bytes.max(1);
        Self {
            lines: LineReader::new(
                BufReader::with_capacity(capacity, source),
                config.max_line_bytes,
            ),
            parser: SseParser::new(),
            finished: false,
        }
    }

    /// Get a reference to the underlying source.
    pub fn get_ref(&self) -> &R {
        self.lines.get_ref().get_ref()
    }

    /// Recover the source. Bytes already read into the internal buffer but
    /// not yet parsed are lost.
    pub fn into_inner(self) -> R {
        self.lines.into_inner().into_inner()
    }
}

impl<R: Read> Iterator for DataStream<R> {
    type Item = SseResult<Bytes>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.lines.next_line() {
                Ok(Some(line)) => {
                    if let Some(payload) = self.parser.feed_line(line) {
                        return Some(Ok(payload));
                    }
                }
                Ok(None) => {
                    self.finished = true;
                    return self.parser.finish().map(Ok);
                }
                Err(e) => {
                    self.finished = true;
                    self.parser.reset();
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<R: Read> FusedIterator for DataStream<R> {}
