//! Race: the first task to report wins, success or failure.
//!
//! The timed variant adds one synthetic task, launched after the real ones,
//! that sleeps for the timeout and then reports the deadline sentinel. The
//! flag is `false` only when that synthetic task wins. A real task's fault
//! that arrives first is returned with `true`: the flag tells a timeout
//! apart from a settled race, not a good result from a bad one.

use std::thread;
use std::time::Duration;

use crate::error::Fault;
use crate::runtime::session::{Next, Session};
use crate::task::Task;
use crate::types::{Outcome, Report, Settlement};
use crate::wall::Wall;

/// A task that reports the deadline sentinel after `timeout`.
pub(crate) fn deadline_task<T: Send + 'static>(
    timeout: Duration,
) -> impl FnOnce() -> Result<T, Fault> + Send + 'static {
    move || {
        thread::sleep(timeout);
        Err(Fault::deadline_elapsed())
    }
}

/// Takes the first report. `sentinel` is the position of the synthetic
/// deadline task, if one was launched.
pub(crate) fn collect<T>(session: &mut Session<'_, T>, sentinel: Option<usize>) -> Report<T> {
    match session.next() {
        Next::Report(report) if Some(report.position) == sentinel => {
            session.settle(vec![report.outcome], Settlement::TimedOut)
        }
        Next::Report(report) => session.settle(vec![report.outcome], Settlement::Completed),
        Next::DeadlineElapsed => {
            session.settle(vec![Outcome::deadline_elapsed()], Settlement::TimedOut)
        }
        // Nothing was launched, so nothing can ever settle.
        Next::Exhausted => session.settle(vec![Outcome::Unsettled], Settlement::Completed),
    }
}

/// Returns the outcome of whichever task reports first.
///
/// An empty task set returns [`Outcome::Unsettled`].
pub fn race<I, K>(tasks: I) -> Outcome<K::Output>
where
    I: IntoIterator<Item = K>,
    K: Task,
{
    Wall::default().race(tasks)
}

/// [`race`] against a synthetic task that reports the deadline sentinel
/// after `timeout`; the flag is `false` iff the synthetic task wins.
pub fn race_timed<I, K>(timeout: Duration, tasks: I) -> (Outcome<K::Output>, bool)
where
    I: IntoIterator<Item = K>,
    K: Task,
{
    Wall::default().race_timed(timeout, tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoxTask;
    use crate::test_utils::{failing, init_test_logging, panicking, sleepy};

    #[test]
    fn fastest_wins() {
        init_test_logging();
        let tasks: Vec<BoxTask<&str>> = vec![sleepy("1", 50), sleepy("2", 400)];
        assert_eq!(race(tasks), Outcome::Ok("1"));
    }

    #[test]
    fn fastest_fault_wins() {
        init_test_logging();
        let tasks: Vec<BoxTask<&str>> = vec![panicking("I am in panic"), sleepy("2", 400)];
        assert_eq!(race(tasks), Outcome::Err(Fault::panicked("I am in panic")));
    }

    #[test]
    fn empty_race_is_unsettled() {
        assert_eq!(race(Vec::<BoxTask<u8>>::new()), Outcome::Unsettled);
    }

    #[test]
    fn timed_real_task_wins() {
        init_test_logging();
        let tasks: Vec<BoxTask<&str>> = vec![sleepy("1", 100), sleepy("2", 600)];
        assert_eq!(
            race_timed(Duration::from_millis(400), tasks),
            (Outcome::Ok("1"), true)
        );
    }

    #[test]
    fn timed_deadline_wins() {
        init_test_logging();
        let tasks: Vec<BoxTask<&str>> = vec![sleepy("1", 500), sleepy("2", 900)];
        assert_eq!(
            race_timed(Duration::from_millis(100), tasks),
            (Outcome::deadline_elapsed(), false)
        );
    }

    #[test]
    fn timed_task_fault_still_counts_as_settled() {
        init_test_logging();
        let tasks: Vec<BoxTask<&str>> = vec![failing("refused", 20), sleepy("2", 600)];
        assert_eq!(
            race_timed(Duration::from_millis(400), tasks),
            (Outcome::Err(Fault::task("refused")), true)
        );
    }

    #[test]
    fn timed_task_reporting_sentinel_is_not_a_timeout() {
        init_test_logging();
        let tasks: Vec<BoxTask<&str>> =
            vec![crate::task::boxed(|| Err(Fault::deadline_elapsed()))];
        let (outcome, ok) = race_timed(Duration::from_millis(400), tasks);
        assert!(outcome.is_deadline_elapsed());
        assert!(ok);
    }

    #[test]
    fn timed_empty_race_times_out() {
        let (outcome, ok) = race_timed(Duration::from_millis(20), Vec::<BoxTask<u8>>::new());
        assert!(outcome.is_deadline_elapsed());
        assert!(!ok);
    }
}
