//! Aggregation policies.
//!
//! Each policy consumes reports from a session until its stopping condition
//! holds, then settles the session:
//!
//! - [`all`](mod@all): every task must succeed; first fault aborts
//! - [`settled`]: every task reports; outcomes in input order
//! - [`race`](mod@race): first report wins
//! - [`some`](mod@some): first K reports, in completion order
//!
//! Every policy has a deadline-bounded variant. The free functions here use
//! a default [`Wall`](crate::Wall); use a configured `Wall` to control how
//! task threads are started.

pub mod all;
pub mod race;
pub mod settled;
pub mod some;

pub use all::{all, all_timed};
pub use race::{race, race_timed};
pub use settled::{all_settled, all_settled_timed};
pub use some::{some, some_timed};

/// Which waiting policy a session follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Wait for every task; stop at the first fault.
    All,
    /// Wait for every task, faults included.
    AllSettled,
    /// Wait for the first report.
    Race,
    /// Wait for the first `k` reports.
    Some(usize),
}

impl Policy {
    /// Returns `true` if the policy returns outcomes in input order.
    #[must_use]
    pub const fn preserves_input_order(self) -> bool {
        matches!(self, Self::All | Self::AllSettled)
    }
}
