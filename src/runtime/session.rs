//! Aggregation sessions.
//!
//! A [`Session`] is the state of one combinator invocation: a private
//! completion channel, the abandonment signal its task threads check, and a
//! deadline. Policies pull reports out of it with [`Session::next`] and hand
//! their answer back through [`Session::settle`], which raises abandonment.
//! Dropping a session raises abandonment too, so every exit path, including
//! unwinding out of a policy, stops late reports from being delivered.

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, select};

use crate::config::LaunchConfig;
use crate::runtime::launcher::{self, Reporter};
use crate::runtime::{AbandonSignal, Deadline};
use crate::task::Task;
use crate::tracing_compat::{debug, trace};
use crate::types::{Indexed, Outcome, Report, Settlement};

/// What a session produced on one wait.
#[derive(Debug)]
pub(crate) enum Next<T> {
    /// A task reported.
    Report(Indexed<T>),
    /// The deadline fired first.
    DeadlineElapsed,
    /// Every launched task has already been received.
    Exhausted,
}

pub(crate) struct Session<'a, T> {
    config: &'a LaunchConfig,
    reporter: Reporter<T>,
    reports: Receiver<Indexed<T>>,
    abandon: AbandonSignal,
    deadline: Deadline,
    launched: usize,
    received: usize,
    opened_at: Instant,
}

impl<'a, T: Send + 'static> Session<'a, T> {
    /// Opens a session. The deadline starts counting now, before any launch.
    pub(crate) fn open(config: &'a LaunchConfig, deadline: Deadline) -> Self {
        let (sender, reports) = crossbeam_channel::unbounded();
        let abandon = AbandonSignal::new();
        Self {
            config,
            reporter: Reporter::new(sender, abandon.clone()),
            reports,
            abandon,
            deadline,
            launched: 0,
            received: 0,
            opened_at: Instant::now(),
        }
    }

    /// Launches one task at the next free position and returns that position.
    pub(crate) fn launch<K>(&mut self, task: K) -> usize
    where
        K: Task<Output = T>,
    {
        let position = self.launched;
        launcher::launch(self.config, position, task, &self.reporter);
        self.launched += 1;
        position
    }

    /// Launches every task in input order.
    pub(crate) fn launch_all<I, K>(&mut self, tasks: I)
    where
        I: IntoIterator<Item = K>,
        K: Task<Output = T>,
    {
        for task in tasks {
            self.launch(task);
        }
        debug!(
            tasks = self.launched,
            bounded = self.deadline.is_bounded(),
            "session opened"
        );
    }
}

impl<T> Session<'_, T> {
    /// Number of tasks launched so far.
    pub(crate) const fn launched(&self) -> usize {
        self.launched
    }

    /// Waits for the next report or the deadline, whichever is ready first.
    pub(crate) fn next(&mut self) -> Next<T> {
        if self.received >= self.launched {
            return Next::Exhausted;
        }
        select! {
            recv(self.reports) -> report => match report {
                Ok(report) => {
                    self.received += 1;
                    trace!(position = report.position, received = self.received, "report received");
                    Next::Report(report)
                }
                Err(_) => Next::Exhausted,
            },
            recv(self.deadline.signal()) -> _ => Next::DeadlineElapsed,
        }
    }

    /// Raises abandonment and packages the policy's answer.
    pub(crate) fn settle(&self, outcomes: Vec<Outcome<T>>, settlement: Settlement) -> Report<T> {
        self.abandon.raise();
        let elapsed = self.elapsed();
        debug!(
            settlement = settlement.name(),
            outcomes = outcomes.len(),
            received = self.received,
            launched = self.launched,
            elapsed = ?elapsed,
            "session settled"
        );
        Report {
            outcomes,
            settlement,
            elapsed,
        }
    }

    /// Time since the session was opened.
    pub(crate) fn elapsed(&self) -> Duration {
        self.opened_at.elapsed()
    }

    /// The session's abandonment signal.
    #[cfg(test)]
    pub(crate) const fn abandon_signal(&self) -> &AbandonSignal {
        &self.abandon
    }
}

impl<T> Drop for Session<'_, T> {
    fn drop(&mut self) {
        if self.abandon.raise() {
            trace!(
                launched = self.launched,
                received = self.received,
                "session dropped before settling"
            );
        }
    }
}
