//! Wait-some: the first K tasks to report, in completion order.

use std::time::Duration;

use crate::runtime::session::{Next, Session};
use crate::task::Task;
use crate::types::{Outcome, Report, Settlement};
use crate::wall::Wall;

pub(crate) fn collect<T>(session: &mut Session<'_, T>, wanted: usize) -> Report<T> {
    let target = wanted.min(session.launched());
    let mut outcomes = Vec::with_capacity(target);
    while outcomes.len() < target {
        match session.next() {
            Next::Report(report) => outcomes.push(report.outcome),
            Next::DeadlineElapsed => {
                outcomes.push(Outcome::deadline_elapsed());
                return session.settle(outcomes, Settlement::TimedOut);
            }
            Next::Exhausted => break,
        }
    }
    session.settle(outcomes, Settlement::Completed)
}

/// Returns the first `min(wanted, N)` outcomes in completion order.
///
/// Faults count toward `wanted` like any other outcome.
pub fn some<I, K>(wanted: usize, tasks: I) -> Vec<Outcome<K::Output>>
where
    I: IntoIterator<Item = K>,
    K: Task,
{
    Wall::default().some(wanted, tasks)
}

/// [`some`] bounded by `timeout`. On expiry the outcomes collected so far
/// are returned with a trailing deadline sentinel and `false`.
pub fn some_timed<I, K>(
    timeout: Duration,
    wanted: usize,
    tasks: I,
) -> (Vec<Outcome<K::Output>>, bool)
where
    I: IntoIterator<Item = K>,
    K: Task,
{
    Wall::default().some_timed(timeout, wanted, tasks)
}
