//! Deadline signals.
//!
//! A [`Deadline`] is a one-shot channel that delivers a single message once
//! its duration has elapsed, so a session can wait on it and the completion
//! channel in the same `select!`. An unbounded session uses
//! [`Deadline::never`], which shares the same shape but never fires.

use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;

/// A one-shot timer that can be raced against a channel.
#[derive(Debug)]
pub struct Deadline {
    signal: Receiver<Instant>,
    expires_at: Option<Instant>,
}

impl Deadline {
    /// Fires once, `timeout` from now. Never fires early.
    #[must_use]
    pub fn after(timeout: Duration) -> Self {
        Self {
            expires_at: Instant::now().checked_add(timeout),
            signal: crossbeam_channel::after(timeout),
        }
    }

    /// Never fires.
    #[must_use]
    pub fn never() -> Self {
        Self {
            signal: crossbeam_channel::never(),
            expires_at: None,
        }
    }

    /// The receiver to select on.
    #[must_use]
    pub fn signal(&self) -> &Receiver<Instant> {
        &self.signal
    }

    /// The instant the deadline fires, or `None` if it never does.
    #[must_use]
    pub const fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }

    /// Returns `true` if the deadline is bounded.
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        self.expires_at.is_some()
    }

    /// Time left before the deadline fires, `None` if unbounded.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|at| at.saturating_duration_since(Instant::now()))
    }
}
