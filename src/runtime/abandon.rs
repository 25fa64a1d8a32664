//! The abandonment signal.
//!
//! Raised once a combinator has its answer. Threads still running keep
//! running; the signal only turns their eventual report into a no-op.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A one-shot, broadcast "no longer interested" flag.
///
/// Clones share the same flag. Raising is idempotent: the first raise flips
/// the flag, later raises observe it and do nothing.
///
/// ```
/// use brickwall::runtime::AbandonSignal;
///
/// let signal = AbandonSignal::new();
/// let observer = signal.clone();
/// assert!(signal.raise());
/// assert!(!signal.raise());
/// assert!(observer.is_raised());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AbandonSignal {
    raised: Arc<AtomicBool>,
}

impl AbandonSignal {
    /// Creates a signal that has not been raised.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the signal. Returns `true` only for the call that raised it.
    pub fn raise(&self) -> bool {
        !self.raised.swap(true, Ordering::AcqRel)
    }

    /// Returns `true` once the signal has been raised.
    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}
