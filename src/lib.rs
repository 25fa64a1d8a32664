//! Brickwall: concurrent task-aggregation combinators.
//!
//! # Overview
//!
//! Hand brickwall a set of independent tasks and a waiting policy. It starts
//! one thread per task, collects their outcomes as they finish, and returns
//! as soon as the policy has its answer:
//!
//! | Operation                       | Waits for                        | Order      |
//! |---------------------------------|----------------------------------|------------|
//! | [`all`](fn@all)                 | every task, stops at first fault | input      |
//! | [`all_settled`](fn@all_settled) | every task                       | input      |
//! | [`race`](fn@race)               | the first task                   | n/a        |
//! | [`some`](fn@some)               | the first K tasks                | completion |
//!
//! Each has a `_timed` variant bounded by a deadline.
//!
//! # Guarantees
//!
//! - **Fault isolation**: a task that panics produces an ordinary
//!   [`Outcome::Err`]; siblings and the caller are unaffected
//! - **Position correlation**: order-preserving policies return outcomes in
//!   input order no matter which task finished first
//! - **Prompt return**: once a policy has its answer the session is
//!   abandoned; late reports are discarded without blocking
//! - **No preemption**: abandoned tasks keep running to completion on their
//!   own threads, their results are simply dropped
//!
//! # Module Structure
//!
//! - [`task`]: The task contract
//! - [`types`]: Outcomes, indexed outcomes, reports
//! - [`error`](mod@error): Fault types
//! - [`runtime`]: Abandonment signal, deadlines, launcher, sessions
//! - [`combinator`]: The aggregation policies
//! - [`config`]: Launch configuration
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use brickwall::{BoxTask, Fault, Outcome, all_settled_timed, task};
//!
//! let tasks: Vec<BoxTask<&str>> = vec![
//!     task::boxed(|| Ok("cached")),
//!     task::boxed(|| Err(Fault::task("not found"))),
//! ];
//! let (outcomes, ok) = all_settled_timed(Duration::from_secs(5), tasks);
//! assert!(ok);
//! assert_eq!(outcomes[0], Outcome::Ok("cached"));
//! assert_eq!(outcomes[1], Outcome::Err(Fault::task("not found")));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod combinator;
pub mod config;
pub mod error;
pub mod runtime;
pub mod task;
pub(crate) mod tracing_compat;
pub mod types;
mod wall;

// ── Test-only modules ───────────────────────────────────────────────────
#[cfg(any(test, feature = "test-internals"))]
pub mod test_utils;

pub use combinator::{
    Policy, all, all_settled, all_settled_timed, all_timed, race, race_timed, some, some_timed,
};
pub use config::{ConfigError, LaunchConfig};
pub use error::{Fault, FaultKind};
pub use task::{BoxTask, Task};
pub use types::{Indexed, Outcome, Report, Settlement};
pub use wall::Wall;
