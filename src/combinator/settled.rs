//! Wait-all-settled: every task reports, nothing exits early.
//!
//! Outcomes come back in input order whatever they hold. The timed variant
//! stops at the deadline; positions that had not reported by then are
//! [`Outcome::Unsettled`].

use std::time::Duration;

use crate::runtime::session::{Next, Session};
use crate::task::Task;
use crate::types::outcome::restore_order;
use crate::types::{Indexed, Outcome, Report, Settlement};
use crate::wall::Wall;

pub(crate) fn collect<T>(session: &mut Session<'_, T>) -> Report<T> {
    let total = session.launched();
    let mut reports: Vec<Indexed<T>> = Vec::with_capacity(total);
    let settlement = loop {
        match session.next() {
            Next::Report(report) => reports.push(report),
            Next::DeadlineElapsed => break Settlement::TimedOut,
            Next::Exhausted => break Settlement::Completed,
        }
    };
    session.settle(restore_order(total, reports), settlement)
}

/// Runs every task and returns every outcome in input order.
pub fn all_settled<I, K>(tasks: I) -> Vec<Outcome<K::Output>>
where
    I: IntoIterator<Item = K>,
    K: Task,
{
    Wall::default().all_settled(tasks)
}

/// [`all_settled`] bounded by `timeout`. Positions still running at the
/// deadline are `Unsettled` and the flag is `false`.
pub fn all_settled_timed<I, K>(timeout: Duration, tasks: I) -> (Vec<Outcome<K::Output>>, bool)
where
    I: IntoIterator<Item = K>,
    K: Task,
{
    Wall::default().all_settled_timed(timeout, tasks)
}
