//! Cooperative cancellation signal.
//!
//! Writers check a [`CancelSignal`] once, on entry to each write call. The
//! signal is passed explicitly rather than stored so one writer can serve
//! callers with different lifetimes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

/// Something that can report whether the caller has given up.
pub trait CancelSignal {
    /// Returns `true` once cancellation has been requested.
    fn is_cancelled(&self) -> bool;
}

/// A signal that is never triggered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeverCancel;

impl CancelSignal for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl CancelSignal for CancellationToken {
    fn is_cancelled(&self) -> bool {
        CancellationToken::is_cancelled(self)
    }
}

impl CancelSignal for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::SeqCst)
    }
}

impl<T: CancelSignal + ?Sized> CancelSignal for &T {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

impl<T: CancelSignal + ?Sized> CancelSignal for Arc<T> {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}
