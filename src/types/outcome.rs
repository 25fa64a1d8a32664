//! Task outcomes.
//!
//! An [`Outcome`] is what one task slot holds once a combinator returns. It
//! has three observable states, kept distinct on purpose:
//!
//! | State       | Meaning                                                  |
//! |-------------|----------------------------------------------------------|
//! | `Ok(v)`     | the task returned a value                                |
//! | `Err(f)`    | the task failed, panicked, could not start, or timed out |
//! | `Unsettled` | the task had not reported when the session ended         |
//!
//! `Unsettled` only appears in the order-preserving result of a timed
//! all-settled wait, and as the result of racing an empty task set.
//!
//! [`Indexed`] tags an outcome with the task's input position so results can
//! be put back in submission order after arriving in completion order.

use crate::error::Fault;

/// The result of a single task slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<T> {
    /// The task produced a value.
    Ok(T),
    /// The task produced a fault.
    Err(Fault),
    /// Neither a value nor a fault is available.
    Unsettled,
}

impl<T> Outcome<T> {
    /// The outcome recorded when a deadline elapses.
    #[must_use]
    pub const fn deadline_elapsed() -> Self {
        Self::Err(Fault::deadline_elapsed())
    }

    /// Returns `true` if the task produced a value.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the slot holds a fault.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if the slot holds neither a value nor a fault.
    #[must_use]
    pub const fn is_unsettled(&self) -> bool {
        matches!(self, Self::Unsettled)
    }

    /// Returns `true` if the slot holds the deadline sentinel.
    #[must_use]
    pub fn is_deadline_elapsed(&self) -> bool {
        self.fault().is_some_and(Fault::is_deadline_elapsed)
    }

    /// Returns the value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) | Self::Unsettled => None,
        }
    }

    /// Returns the fault, if any.
    #[must_use]
    pub const fn fault(&self) -> Option<&Fault> {
        match self {
            Self::Err(fault) => Some(fault),
            Self::Ok(_) | Self::Unsettled => None,
        }
    }

    /// Consumes the outcome, returning the value if present.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) | Self::Unsettled => None,
        }
    }

    /// Converts into a `Result`, or `None` for an unsettled slot.
    #[must_use]
    pub fn into_result(self) -> Option<Result<T, Fault>> {
        match self {
            Self::Ok(value) => Some(Ok(value)),
            Self::Err(fault) => Some(Err(fault)),
            Self::Unsettled => None,
        }
    }

    /// Maps the value, leaving faults and unsettled slots untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(fault) => Outcome::Err(fault),
            Self::Unsettled => Outcome::Unsettled,
        }
    }
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::Unsettled
    }
}

impl<T> From<Result<T, Fault>> for Outcome<T> {
    fn from(result: Result<T, Fault>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(fault) => Self::Err(fault),
        }
    }
}

/// An outcome tagged with the 0-based input position of its task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indexed<T> {
    /// The task's rank in the submitted sequence.
    pub position: usize,
    /// What the task produced.
    pub outcome: Outcome<T>,
}

impl<T> Indexed<T> {
    /// Tags `outcome` with `position`.
    #[must_use]
    pub const fn new(position: usize, outcome: Outcome<T>) -> Self {
        Self { position, outcome }
    }
}

/// Places position-tagged outcomes back in input order.
///
/// Slots for positions that never reported stay [`Outcome::Unsettled`].
/// Positions outside `0..len` are ignored.
#[must_use]
pub fn restore_order<T>(
    len: usize,
    reports: impl IntoIterator<Item = Indexed<T>>,
) -> Vec<Outcome<T>> {
    let mut slots: Vec<Outcome<T>> = (0..len).map(|_| Outcome::Unsettled).collect();
    for Indexed { position, outcome } in reports {
        if let Some(slot) = slots.get_mut(position) {
            *slot = outcome;
        }
    }
    slots
}
