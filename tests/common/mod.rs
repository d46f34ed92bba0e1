//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//! use common::{encode_events, decode_all};
//!
//! let wire = encode_events(&[b"hello".to_vec()], None);
//! assert_eq!(decode_all(&wire), vec![b"hello".to_vec()]);
//! ```

#![allow(dead_code)]

use bytes::Bytes;
use sse_wire::adapters::MockSink;
use sse_wire::{parse_data_stream, NeverCancel, SseResult, SseWriter};

/// Encode `payloads` as events, adding a keep-alive after every
/// `keep_alive_every`th one.
pub fn encode_events(payloads: &[Vec<u8>], keep_alive_every: Option<usize>) -> Vec<u8> {
    let sink = MockSink::new();
    let mut writer = SseWriter::new(sink.clone()).unwrap();

    for (i, payload) in payloads.iter().enumerate() {
        writer.write_data(&NeverCancel, payload).unwrap();
        if let Some(every) = keep_alive_every {
            if (i + 1) % every == 0 {
                writer.write_keep_alive(&NeverCancel).unwrap();
            }
        }
    }
    sink.body()
}

/// Parse a complete wire buffer, panicking on any error.
pub fn decode_all(wire: &[u8]) -> Vec<Vec<u8>> {
    parse_data_stream(wire)
        .map(|event| event.unwrap().to_vec())
        .collect()
}

/// Parse a complete wire buffer, keeping errors in the output.
pub fn decode_results(wire: &[u8]) -> Vec<SseResult<Bytes>> {
    parse_data_stream(wire).collect()
}

/// Payloads that exercise every framing edge: empty, newline-only,
/// leading spaces, colons, CR bytes and non-UTF-8.
pub fn tricky_payloads() -> Vec<Vec<u8>> {
    vec![
        b"".to_vec(),
        b"\n".to_vec(),
        b"\n\n\n".to_vec(),
        b"a\n\nb".to_vec(),
        b" leading space".to_vec(),
        b"  two spaces\n indented".to_vec(),
        b"data: looks like a field".to_vec(),
        b": looks like a comment".to_vec(),
        b"trailing newline\n".to_vec(),
        b"carriage\rreturn\r".to_vec(),
        b"crlf line\r\nnext".to_vec(),
        vec![0xff, 0xfe, 0x00, 0x80],
        "snowman \u{2603} and \u{1F600}".as_bytes().to_vec(),
        br#"{"type":"content","text":"hi"}"#.to_vec(),
    ]
}

/// Deterministic pseudo-random payload generator.
pub struct PayloadGen {
    state: u64,
}

impl PayloadGen {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        // xorshift64
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Next payload of up to `max_len` bytes, biased toward framing bytes.
    pub fn payload(&mut self, max_len: usize) -> Vec<u8> {
        let len = (self.next_u64() as usize) % (max_len + 1);
        (0..len)
            .map(|_| match self.next_u64() % 8 {
                0 => b'\n',
                1 => b' ',
                2 => b':',
                3 => b'\r',
                _ => (self.next_u64() % 256) as u8,
            })
            .collect()
    }
}
