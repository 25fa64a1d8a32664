//! Fault types carried inside task outcomes.
//!
//! Every failure a task can experience is expressed as a [`Fault`]: an
//! immutable, comparable value with a [`FaultKind`] and a human-readable
//! description. Faults are always delivered as ordinary values inside an
//! [`Outcome`](crate::Outcome); no combinator ever unwinds or returns `Err`
//! because a task failed.

use core::fmt;
use std::any::Any;
use std::borrow::Cow;

/// Description carried by the deadline sentinel.
pub const DEADLINE_ELAPSED_DESCRIPTION: &str = "Timeout Expired";

const OPAQUE_PANIC_DESCRIPTION: &str = "task panicked with a non-string payload";

/// The origin of a [`Fault`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// The task ran to completion and returned an error.
    Task,
    /// The task panicked; the launcher caught the panic.
    Panicked,
    /// The task's thread could not be started, so the task never ran.
    Launch,
    /// A timed combinator's deadline elapsed. Never produced by a task.
    DeadlineElapsed,
}

impl FaultKind {
    /// Returns a short, stable name for the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Panicked => "panicked",
            Self::Launch => "launch",
            Self::DeadlineElapsed => "deadline-elapsed",
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An error reported for a single task.
///
/// # Example
///
/// ```
/// use brickwall::{Fault, FaultKind};
///
/// let fault = Fault::task("connection refused");
/// assert_eq!(fault.kind(), FaultKind::Task);
/// assert_eq!(fault.to_string(), "connection refused");
///
/// assert!(Fault::deadline_elapsed().is_deadline_elapsed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fault {
    kind: FaultKind,
    description: Cow<'static, str>,
}

impl Fault {
    /// Creates a fault of the given kind.
    #[must_use]
    pub fn new(kind: FaultKind, description: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }

    /// Creates a task-returned error.
    #[must_use]
    pub fn task(description: impl Into<Cow<'static, str>>) -> Self {
        Self::new(FaultKind::Task, description)
    }

    /// Creates a fault for a task that panicked with the given message.
    #[must_use]
    pub fn panicked(description: impl Into<Cow<'static, str>>) -> Self {
        Self::new(FaultKind::Panicked, description)
    }

    /// Creates a fault for a task whose thread could not be started.
    #[must_use]
    pub fn launch(description: impl Into<Cow<'static, str>>) -> Self {
        Self::new(FaultKind::Launch, description)
    }

    /// The sentinel meaning "deadline elapsed before completion".
    #[must_use]
    pub const fn deadline_elapsed() -> Self {
        Self {
            kind: FaultKind::DeadlineElapsed,
            description: Cow::Borrowed(DEADLINE_ELAPSED_DESCRIPTION),
        }
    }

    /// Builds a [`FaultKind::Panicked`] fault from a caught panic payload.
    ///
    /// `&str` and `String` payloads (what `panic!` produces) become the
    /// description verbatim.
    #[must_use]
    pub fn from_panic_payload(payload: &(dyn Any + Send)) -> Self {
        if let Some(message) = payload.downcast_ref::<&'static str>() {
            Self::panicked(*message)
        } else if let Some(message) = payload.downcast_ref::<String>() {
            Self::panicked(message.clone())
        } else {
            Self::panicked(OPAQUE_PANIC_DESCRIPTION)
        }
    }

    /// Returns the fault kind.
    #[must_use]
    pub const fn kind(&self) -> FaultKind {
        self.kind
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` if this is the deadline sentinel.
    #[must_use]
    pub const fn is_deadline_elapsed(&self) -> bool {
        matches!(self.kind, FaultKind::DeadlineElapsed)
    }

    /// Returns `true` if the task panicked.
    #[must_use]
    pub const fn is_panic(&self) -> bool {
        matches!(self.kind, FaultKind::Panicked)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FaultKind::Task | FaultKind::DeadlineElapsed => f.write_str(&self.description),
            FaultKind::Panicked => write!(f, "task panicked: {}", self.description),
            FaultKind::Launch => write!(f, "task launch failed: {}", self.description),
        }
    }
}

impl std::error::Error for Fault {}

impl From<&'static str> for Fault {
    fn from(description: &'static str) -> Self {
        Self::task(description)
    }
}

impl From<String> for Fault {
    fn from(description: String) -> Self {
        Self::task(description)
    }
}

impl From<std::io::Error> for Fault {
    fn from(err: std::io::Error) -> Self {
        Self::task(err.to_string())
    }
}
