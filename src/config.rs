//! Writer and parser configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config file.
//! Environment variables override file values:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `SSE_WIRE_MAX_LINE_BYTES` | `parser.max_line_bytes` (`0` or `none` clears it) |
//! | `SSE_WIRE_READ_BUFFER_BYTES` | `parser.read_buffer_bytes` |
//! | `SSE_WIRE_KEEPALIVE_MARKER` | `writer.keep_alive_marker` |

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SseError, SseResult};

pub const ENV_MAX_LINE_BYTES: &str = "SSE_WIRE_MAX_LINE_BYTES";
pub const ENV_READ_BUFFER_BYTES: &str = "SSE_WIRE_READ_BUFFER_BYTES";
pub const ENV_KEEPALIVE_MARKER: &str = "SSE_WIRE_KEEPALIVE_MARKER";

/// Default comment text sent by `write_keep_alive`.
pub const DEFAULT_KEEPALIVE_MARKER: &str = "keep-alive";

/// Default initial read buffer. Lines longer than this still parse; the line
/// buffer grows as needed.
pub const DEFAULT_READ_BUFFER_BYTES: usize = 64 * 1024;

/// Settings for `SseWriter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Text after `: ` on keep-alive comment lines.
    pub keep_alive_marker: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            keep_alive_marker: DEFAULT_KEEPALIVE_MARKER.to_string(),
        }
    }
}

impl WriterConfig {
    /// Check that the marker cannot break out of its comment line.
    pub fn validate(&self) -> SseResult<()> {
        if self.keep_alive_marker.contains(['\n', '\r']) {
            return Err(SseError::InvalidConfig(
                "keep_alive_marker must not contain line breaks".to_string(),
            ));
        }
        Ok(())
    }
}

/// Settings for the data-stream parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Longest accepted line, excluding its newline. `None` lets the line
    /// buffer grow without a ceiling.
    pub max_line_bytes: Option<usize>,
    /// Initial capacity of the read buffer.
    pub read_buffer_bytes: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_line_bytes: None,
            read_buffer_bytes: DEFAULT_READ_BUFFER_BYTES,
        }
    }
}

impl ParserConfig {
    /// Builder-style setter for the line ceiling.
    pub fn with_max_line_bytes(mut self, limit: usize) -> Self {
        self.max_line_bytes = Some(limit);
        self
    }

    pub fn validate(&self) -> SseResult<()> {
        if self.max_line_bytes == Some(0) {
            return Err(SseError::InvalidConfig(
                "max_line_bytes must be greater than zero".to_string(),
            ));
        }
        if self.read_buffer_bytes == 0 {
            return Err(SseError::InvalidConfig(
                "read_buffer_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Combined configuration, as loaded by the `sse-wire` binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub writer: WriterConfig,
    pub parser: ParserConfig,
}

impl Config {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> SseResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> SseResult<()> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    fn apply_vars<F>(&mut self, lookup: F) -> SseResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_MAX_LINE_BYTES) {
            let raw = raw.trim();
            self.parser.max_line_bytes = if raw.eq_ignore_ascii_case("none") {
                None
            } else {
                match parse_size(ENV_MAX_LINE_BYTES, raw)? {
                    0 => None,
                    n => Some(n),
                }
            };
        }
        if let Some(raw) = lookup(ENV_READ_BUFFER_BYTES) {
            self.parser.read_buffer_bytes = parse_size(ENV_READ_BUFFER_BYTES, raw.trim())?;
        }
        if let Some(marker) = lookup(ENV_KEEPALIVE_MARKER) {
            self.writer.keep_alive_marker = marker;
        }
        self.validate()
    }

    pub fn validate(&self) -> SseResult<()> {
        self.writer.validate()?;
        self.parser.validate()
    }
}

fn parse_size(variable: &str, raw: &str) -> SseResult<usize> {
    raw.parse::<usize>()
        .map_err(|e| SseError::InvalidConfig(format!("{}={:?}: {}", variable, raw, e)))
}
