//! The fault-isolating launcher.
//!
//! Each task runs on its own thread. The thread invokes the task under
//! `catch_unwind`, so a panic becomes an ordinary [`FaultKind::Panicked`]
//! outcome instead of tearing anything down, then hands the position-tagged
//! outcome to a [`Reporter`].
//!
//! A report is delivered only while its session is still listening: the
//! reporter checks the abandonment flag first, and the completion channel is
//! unbounded, so a send never blocks and a send to a dropped session is
//! discarded.
//!
//! [`FaultKind::Panicked`]: crate::FaultKind::Panicked

use std::panic::{self, AssertUnwindSafe};
use std::thread;

use crossbeam_channel::Sender;

use crate::config::LaunchConfig;
use crate::error::Fault;
use crate::runtime::AbandonSignal;
use crate::task::Task;
use crate::tracing_compat::{trace, warn};
use crate::types::{Indexed, Outcome};

/// The sending half of a session, shared by its task threads.
pub(crate) struct Reporter<T> {
    sender: Sender<Indexed<T>>,
    abandon: AbandonSignal,
}

impl<T> Clone for Reporter<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            abandon: self.abandon.clone(),
        }
    }
}

impl<T> Reporter<T> {
    pub(crate) const fn new(sender: Sender<Indexed<T>>, abandon: AbandonSignal) -> Self {
        Self { sender, abandon }
    }

    /// Delivers `report` unless the session was abandoned. Never blocks.
    pub(crate) fn report(&self, report: Indexed<T>) {
        if self.abandon.is_raised() {
            trace!(position = report.position, "session abandoned, report discarded");
            return;
        }
        if self.sender.send(report).is_err() {
            trace!("session gone, report discarded");
        }
    }
}

/// Runs `task` on the current thread, converting a panic into a fault.
pub(crate) fn run_isolated<K: Task>(task: K) -> Outcome<K::Output> {
    match panic::catch_unwind(AssertUnwindSafe(|| task.run())) {
        Ok(result) => Outcome::from(result),
        Err(payload) => {
            let fault = Fault::from_panic_payload(payload.as_ref());
            warn!(fault = %fault, "task panicked");
            Outcome::Err(fault)
        }
    }
}

/// Starts one thread that runs `task` and reports it at `position`.
///
/// If the thread cannot be started the task is dropped unrun and a
/// [`FaultKind::Launch`](crate::FaultKind::Launch) outcome is reported in its
/// place, so every position still reports exactly once.
pub(crate) fn launch<K: Task>(
    config: &LaunchConfig,
    position: usize,
    task: K,
    reporter: &Reporter<K::Output>,
) {
    let mut builder = thread::Builder::new().name(format!("{}-{position}", config.thread_name));
    if let Some(bytes) = config.stack_size {
        builder = builder.stack_size(bytes);
    }

    let thread_reporter = reporter.clone();
    let spawned = builder.spawn(move || {
        let outcome = run_isolated(task);
        thread_reporter.report(Indexed::new(position, outcome));
    });

    match spawned {
        Ok(_detached) => trace!(position, "task launched"),
        Err(err) => {
            warn!(position, error = %err, "task thread failed to start");
            reporter.report(Indexed::new(
                position,
                Outcome::Err(Fault::launch(err.to_string())),
            ));
        }
    }
}
