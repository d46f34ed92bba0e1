//! Error handling for sse-wire.
//!
//! | Variant | Raised by | Fatal to the stream |
//! |---------|-----------|---------------------|
//! | `Capability` | `SseWriter::new` | n/a (no stream yet) |
//! | `Canceled` | `write_data` / `write_keep_alive` | No |
//! | `Io` | any write, flush or read | Yes |
//! | `LineTooLong` | parser | Yes |
//! | `InvalidConfig` / `ConfigParse` | `config` | n/a |

mod result;
mod sse_error;

pub use result::SseResult;
pub use sse_error::SseError;
