//! Async data-stream parser over a byte-chunk stream.
//!
//! Intended for HTTP client bodies such as reqwest's `bytes_stream()`. Chunk
//! boundaries are arbitrary; lines and events are reassembled across them.

use bytes::Bytes;
use futures_util::stream::{self, Stream, StreamExt};

use super::lines::LineBuffer;
use super::SseParser;
use crate::config::ParserConfig;
use crate::error::{SseError, SseResult};

struct State<S> {
    chunks: S,
    lines: LineBuffer,
    parser: SseParser,
    finished: bool,
}

/// Parse an async stream of byte chunks into event payloads.
///
/// Semantics match [`parse_data_stream`](super::parse_data_stream): comments
/// are skipped, an unterminated final event is emitted at end of stream, and
/// the first transport error (wrapped as [`SseError::Io`]) or over-long line
/// ends the stream.
///
/// # Example
///
/// ```ignore
/// use futures_util::StreamExt;
/// use sse_wire::{parse_byte_stream, ParserConfig};
///
/// let response = client.get(url).send().await?;
/// let events = parse_byte_stream(response.bytes_stream(), &ParserConfig::default());
/// futures_util::pin_mut!(events);
/// while let Some(event) = events.next().await {
///     println!("{:?}", event?);
/// }
/// ```
pub fn parse_byte_stream<S, B, E>(
    chunks: S,
    config: &ParserConfig,
) -> impl Stream<Item = SseResult<Bytes>>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let state = State {
        chunks,
        lines: LineBuffer::new(config.max_line_bytes),
        parser: SseParser::new(),
        finished: false,
    };

    stream::unfold(state, |mut state| async move {
        if state.finished {
            return None;
        }

        loop {
            // First, drain complete lines already buffered
            match state.lines.next_line() {
                Ok(Some(line)) => {
                    if let Some(payload) = state.parser.feed_line(&line) {
                        return Some((Ok(payload), state));
                    }
                    continue;
                }
                Ok(None) => {}
                Err(e) => return Some((Err(e), state.fail())),
            }

            // Need more data from the stream
            match state.chunks.next().await {
                Some(Ok(chunk)) => state.lines.push(chunk.as_ref()),
                Some(Err(e)) => return Some((Err(SseError::transport(e)), state.fail())),
                None => {
                    state.finished = true;
                    match state.lines.take_remainder() {
                        Ok(Some(line)) => {
                            if let Some(payload) = state.parser.feed_line(&line) {
                                return Some((Ok(payload), state));
                            }
                        }
                        Ok(None) => {}
                        Err(e) => return Some((Err(e), state.fail())),
                    }
                    return state.parser.finish().map(|payload| (Ok(payload), state));
                }
            }
        }
    })
}

impl<S> State<S> {
    fn fail(mut self) -> Self {
        self.finished = true;
        self.parser.reset();
        self
    }
}
