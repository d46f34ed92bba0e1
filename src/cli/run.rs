//! `encode` and `decode` commands.
//!
//! Both take generic readers and writers so tests can drive them with
//! in-memory buffers; `run_cli_command` wires them to stdin/stdout.

use std::io::{BufRead, Read, Write};

use tracing::{debug, info};

use crate::adapters::IoSink;
use crate::config::{ParserConfig, WriterConfig};
use crate::error::SseResult;
use crate::sse::{parse_data_stream_with, SseWriter};
use crate::traits::NeverCancel;

/// Write each input line (without its `\n`) as one event.
///
/// With `keep_alive_every = Some(n)`, a keep-alive follows every `n`th
/// event. Returns the number of events written.
pub fn encode<R, W>(
    input: R,
    output: W,
    config: &WriterConfig,
    keep_alive_every: Option<usize>,
) -> SseResult<usize>
where
    R: BufRead,
    W: Write,
{
    let mut writer = SseWriter::with_config(IoSink::new(output), config.clone())?;
    let mut events = 0;

    for line in input.split(b'\n') {
        let line = line?;
        writer.write_data(&NeverCancel, &line)?;
        events += 1;

        if let Some(every) = keep_alive_every.filter(|&n| n > 0) {
            if events % every == 0 {
                writer.write_keep_alive(&NeverCancel)?;
            }
        }
    }

    info!(events, "encode finished");
    Ok(events)
}

/// Print each payload of the input stream followed by a newline. Returns the
/// number of events read.
pub fn decode<R, W>(input: R, mut output: W, config: &ParserConfig) -> SseResult<usize>
where
    R: Read,
    W: Write,
{
    let mut events = 0;

    for event in parse_data_stream_with(input, config) {
        let payload = event?;
        debug!(bytes = payload.len(), "decoded event");
        output.write_all(&payload)?;
        output.write_all(b"\n")?;
        events += 1;
    }
    output.flush()?;

    info!(events, "decode finished");
    Ok(events)
}
