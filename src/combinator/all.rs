//! Wait-all: every task must succeed.
//!
//! Outcomes are returned in input order when every task succeeds. The first
//! fault observed, in completion order, ends the wait: the session is
//! abandoned and that single outcome is returned. The timed variant also
//! ends on the deadline, returning only the deadline sentinel.

use std::time::Duration;

use crate::runtime::session::{Next, Session};
use crate::task::Task;
use crate::types::outcome::restore_order;
use crate::types::{Indexed, Outcome, Report, Settlement};
use crate::wall::Wall;

pub(crate) fn collect<T>(session: &mut Session<'_, T>) -> Report<T> {
    let total = session.launched();
    let mut reports: Vec<Indexed<T>> = Vec::with_capacity(total);
    loop {
        match session.next() {
            Next::Report(report) if report.outcome.is_err() => {
                let position = report.position;
                return session.settle(vec![report.outcome], Settlement::Aborted { position });
            }
            Next::Report(report) => reports.push(report),
            Next::DeadlineElapsed => {
                return session.settle(vec![Outcome::deadline_elapsed()], Settlement::TimedOut);
            }
            Next::Exhausted => {
                return session.settle(restore_order(total, reports), Settlement::Completed);
            }
        }
    }
}

/// Runs every task; returns all values in input order and `true`, or the
/// first fault alone and `false`.
///
/// ```
/// use brickwall::{Fault, Outcome, all, task};
///
/// let (outcomes, ok) = all(vec![task::boxed(|| Ok(1)), task::boxed(|| Ok(2))]);
/// assert!(ok);
/// assert_eq!(outcomes, vec![Outcome::Ok(1), Outcome::Ok(2)]);
///
/// let (outcomes, ok) = all(vec![
///     task::boxed(|| Ok(1)),
///     task::boxed(|| Err(Fault::task("down"))),
/// ]);
/// assert!(!ok);
/// assert_eq!(outcomes, vec![Outcome::Err(Fault::task("down"))]);
/// ```
pub fn all<I, K>(tasks: I) -> (Vec<Outcome<K::Output>>, bool)
where
    I: IntoIterator<Item = K>,
    K: Task,
{
    Wall::default().all(tasks)
}

/// [`all`] bounded by `timeout`; on expiry returns only the deadline
/// sentinel and `false`.
pub fn all_timed<I, K>(timeout: Duration, tasks: I) -> (Vec<Outcome<K::Output>>, bool)
where
    I: IntoIterator<Item = K>,
    K: Task,
{
    Wall::default().all_timed(timeout, tasks)
}
