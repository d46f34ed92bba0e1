//! Wire format shared by the writer and the parser.
//!
//! ```text
//! <comment-line> ::= ":" <any-text-without-newline> "\n"
//! <data-line>    ::= "data:" <payload-line> "\n"
//! <blank-line>   ::= "\n"
//! <event>        ::= (<data-line>)+ <blank-line>
//! <keepalive>    ::= <comment-line> <blank-line>
//! ```

/// Media type for SSE response bodies.
pub const CONTENT_EVENT_STREAM: &str = "text/event-stream";

/// Headers set by `SseWriter::write_headers`, in order.
pub const STREAM_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", CONTENT_EVENT_STREAM),
    ("Cache-Control", "no-cache"),
    ("Connection", "keep-alive"),
    // Stops nginx-style proxies from buffering the body.
    ("X-Accel-Buffering", "no"),
];

pub const DATA_FIELD: &[u8] = b"data";
pub const DATA_PREFIX: &[u8] = b"data:";
pub const COMMENT_PREFIX: u8 = b':';

/// One line of an SSE stream, without its trailing newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameLine<'a> {
    /// A `data:` field; holds the value after the prefix and optional space.
    Data(&'a [u8]),
    /// A `:` comment; holds the text after the colon.
    Comment(&'a [u8]),
    /// Empty line - end of event.
    Blank,
    /// Any other field (`event:`, `id:`, `retry:` ...). Not part of this
    /// framing and ignored by the parser.
    Other(&'a [u8]),
}

/// Classify a single line. `line` must not include the `\n` terminator.
///
/// A line holding only `\r` counts as blank so streams from CRLF producers
/// still split into events. Data values are returned verbatim apart from the
/// single optional space after the colon.
pub fn classify_line(line: &[u8]) -> FrameLine<'_> {
    if line.is_empty() || line == b"\r" {
        return FrameLine::Blank;
    }

    if line[0] == COMMENT_PREFIX {
        return FrameLine::Comment(&line[1..]);
    }

    if let Some(value) = line.strip_prefix(DATA_PREFIX) {
        return FrameLine::Data(value.strip_prefix(b" ").unwrap_or(value));
    }

    // A field name with no colon has an empty value.
    if line == DATA_FIELD {
        return FrameLine::Data(&[]);
    }

    FrameLine::Other(line)
}

/// Append the frame for one data event to `out`.
///
/// Each `\n`-separated line of `payload` becomes a `data:` line; a trailing
/// newline yields a final empty `data:` line. Lines that start with a space
/// get an extra separator space, because the parser strips exactly one.
pub fn encode_data(payload: &[u8], out: &mut Vec<u8>) {
    // prefix + optional space + newline per line, plus the terminator
    let lines = payload.iter().filter(|&&b| b == b'\n').count() + 1;
    out.reserve(payload.len() + lines * (DATA_PREFIX.len() + 2) + 1);

    for line in payload.split(|&b| b == b'\n') {
        out.extend_from_slice(DATA_PREFIX);
        if line.first() == Some(&b' ') {
            out.push(b' ');
        }
        out.extend_from_slice(line);
        out.push(b'\n');
    }
    out.push(b'\n');
}

/// Append a keep-alive comment and its blank line to `out`.
pub fn encode_keep_alive(marker: &str, out: &mut Vec<u8>) {
    out.push(COMMENT_PREFIX);
    if !marker.is_empty() {
        out.push(b' ');
        out.extend_from_slice(marker.as_bytes());
    }
    out.extend_from_slice(b"\n\n");
}
