//! Result type alias for sse-wire operations.

use super::sse_error::SseError;

/// Type alias for Results using [`SseError`].
///
/// # Example
///
/// ```ignore
/// use sse_wire::error::SseResult;
///
/// fn send(writer: &mut SseWriter<IoSink<Vec<u8>>>) -> SseResult<()> {
///     writer.write_data(&NeverCancel, b"hello")
/// }
/// ```
pub type SseResult<T> = Result<T, SseError>;
