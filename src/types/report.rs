//! Aggregation reports.
//!
//! Every session walks `Launched → Collecting → terminal`, re-entering
//! `Collecting` once per report consumed. [`Settlement`] names the terminal
//! state; [`Report`] bundles it with the assembled outcomes.

use std::time::Duration;

use crate::types::Outcome;

/// The terminal state of an aggregation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Settlement {
    /// The policy's stopping condition was met.
    Completed,
    /// A task fault stopped the session early (wait-all only).
    Aborted {
        /// Input position of the task whose fault was observed first.
        position: usize,
    },
    /// The deadline fired before the stopping condition was met.
    TimedOut,
}

impl Settlement {
    /// Returns `true` for [`Settlement::Completed`].
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns `true` for [`Settlement::TimedOut`].
    #[must_use]
    pub const fn is_timed_out(self) -> bool {
        matches!(self, Self::TimedOut)
    }

    /// Returns a short, stable name for the state.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Aborted { .. } => "aborted",
            Self::TimedOut => "timed-out",
        }
    }
}

/// The result of one aggregation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<T> {
    /// The outcomes the policy assembled, in the policy's order.
    pub outcomes: Vec<Outcome<T>>,
    /// How the session ended.
    pub settlement: Settlement,
    /// Wall-clock time from session open to settlement.
    pub elapsed: Duration,
}

impl<T> Report<T> {
    /// Returns `true` if the session completed.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.settlement.is_completed()
    }

    /// Splits the report into outcomes and the success flag.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Outcome<T>>, bool) {
        let succeeded = self.succeeded();
        (self.outcomes, succeeded)
    }

    /// Takes the first outcome, or `Unsettled` if there is none.
    #[must_use]
    pub fn into_first(self) -> (Outcome<T>, bool) {
        let succeeded = self.succeeded();
        let first = self.outcomes.into_iter().next().unwrap_or_default();
        (first, succeeded)
    }
}
