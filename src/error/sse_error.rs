//! The crate-wide error type.
//!
//! Every failure the writer, the parser or the configuration layer can
//! produce is a variant of [`SseError`]. Errors are always handed back to the
//! immediate caller; nothing in this crate logs or swallows them.

use std::io;

use thiserror::Error;

/// Errors produced by SSE writing, parsing and configuration.
#[derive(Debug, Error)]
pub enum SseError {
    /// The response sink cannot flush, so events would sit in a transport
    /// buffer instead of reaching the peer. Raised only at writer construction.
    #[error("response sink does not support flushing; events cannot be delivered incrementally")]
    Capability,

    /// The caller's cancellation signal was already triggered when a write was
    /// requested. Nothing was written.
    #[error("write canceled before any bytes were sent")]
    Canceled,

    /// A write, flush or read on the underlying transport failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A single line exceeded the configured maximum line length.
    #[error("SSE line exceeds the configured maximum of {limit} bytes")]
    LineTooLong { limit: usize },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration file could not be decoded.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl SseError {
    /// Wraps a transport error from a byte stream as an I/O error, keeping
    /// the original error as the source.
    pub(crate) fn transport<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        SseError::Io(io::Error::new(io::ErrorKind::Other, err))
    }

    /// Whether the stream this error came from must be abandoned.
    ///
    /// A canceled write leaves the stream untouched, and configuration
    /// errors happen before any stream exists.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SseError::Io(_) | SseError::LineTooLong { .. })
    }

    /// Short, stable error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SseError::Capability => "E_SSE_CAPABILITY",
            SseError::Canceled => "E_SSE_CANCELED",
            SseError::Io(_) => "E_SSE_IO",
            SseError::LineTooLong { .. } => "E_SSE_LINE_TOO_LONG",
            SseError::InvalidConfig(_) => "E_SSE_CONFIG",
            SseError::ConfigParse(_) => "E_SSE_CONFIG_PARSE",
        }
    }
}
