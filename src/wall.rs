//! The configured entry point.

use std::time::Duration;

use crate::combinator::{Policy, all, race, settled, some};
use crate::config::{ConfigError, LaunchConfig};
use crate::runtime::Deadline;
use crate::runtime::session::Session;
use crate::task::Task;
use crate::types::{Outcome, Report};

/// Runs task sets under a [`LaunchConfig`].
///
/// The free functions ([`all`](fn@crate::all), [`race`](fn@crate::race), ...)
/// use `Wall::default()`.
///
/// ```
/// use std::time::Duration;
/// use brickwall::{LaunchConfig, Outcome, Policy, Wall, task};
///
/// let wall = Wall::new(LaunchConfig::new().thread_name("fetch")).unwrap();
/// let report = wall.report(
///     Policy::Some(1),
///     Some(Duration::from_secs(5)),
///     vec![task::boxed(|| Ok("fast"))],
/// );
/// assert!(report.succeeded());
/// assert_eq!(report.outcomes, vec![Outcome::Ok("fast")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Wall {
    config: LaunchConfig,
}

impl Wall {
    /// Creates a wall after validating `config`.
    pub fn new(config: LaunchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The launch configuration.
    #[must_use]
    pub const fn config(&self) -> &LaunchConfig {
        &self.config
    }

    /// Runs `tasks` under `policy`, optionally bounded by `timeout`.
    ///
    /// For [`Policy::Race`] the timeout is enforced by a synthetic task
    /// launched after the real ones; every other policy races a deadline
    /// signal against each wait.
    pub fn report<I, K>(
        &self,
        policy: Policy,
        timeout: Option<Duration>,
        tasks: I,
    ) -> Report<K::Output>
    where
        I: IntoIterator<Item = K>,
        K: Task,
    {
        let deadline = match (policy, timeout) {
            (Policy::Race, _) | (_, None) => Deadline::never(),
            (_, Some(timeout)) => Deadline::after(timeout),
        };
        let mut session = Session::open(&self.config, deadline);
        session.launch_all(tasks);

        match policy {
            Policy::All => all::collect(&mut session),
            Policy::AllSettled => settled::collect(&mut session),
            Policy::Race => {
                let sentinel = timeout.map(|timeout| session.launch(race::deadline_task(timeout)));
                race::collect(&mut session, sentinel)
            }
            Policy::Some(wanted) => some::collect(&mut session, wanted),
        }
    }

    /// See [`all`](fn@crate::all).
    pub fn all<I, K>(&self, tasks: I) -> (Vec<Outcome<K::Output>>, bool)
    where
        I: IntoIterator<Item = K>,
        K: Task,
    {
        self.report(Policy::All, None, tasks).into_parts()
    }

    /// See [`all_timed`](crate::all_timed).
    pub fn all_timed<I, K>(&self, timeout: Duration, tasks: I) -> (Vec<Outcome<K::Output>>, bool)
    where
        I: IntoIterator<Item = K>,
        K: Task,
    {
        self.report(Policy::All, Some(timeout), tasks).into_parts()
    }

    /// See [`all_settled`](crate::all_settled).
    pub fn all_settled<I, K>(&self, tasks: I) -> Vec<Outcome<K::Output>>
    where
        I: IntoIterator<Item = K>,
        K: Task,
    {
        self.report(Policy::AllSettled, None, tasks).outcomes
    }

    /// See [`all_settled_timed`](crate::all_settled_timed).
    pub fn all_settled_timed<I, K>(
        &self,
        timeout: Duration,
        tasks: I,
    ) -> (Vec<Outcome<K::Output>>, bool)
    where
        I: IntoIterator<Item = K>,
        K: Task,
    {
        self.report(Policy::AllSettled, Some(timeout), tasks).into_parts()
    }

    /// See [`race`](fn@crate::race).
    pub fn race<I, K>(&self, tasks: I) -> Outcome<K::Output>
    where
        I: IntoIterator<Item = K>,
        K: Task,
    {
        self.report(Policy::Race, None, tasks).into_first().0
    }

    /// See [`race_timed`](crate::race_timed).
    pub fn race_timed<I, K>(&self, timeout: Duration, tasks: I) -> (Outcome<K::Output>, bool)
    where
        I: IntoIterator<Item = K>,
        K: Task,
    {
        self.report(Policy::Race, Some(timeout), tasks).into_first()
    }

    /// See [`some`](fn@crate::some).
    pub fn some<I, K>(&self, wanted: usize, tasks: I) -> Vec<Outcome<K::Output>>
    where
        I: IntoIterator<Item = K>,
        K: Task,
    {
        self.report(Policy::Some(wanted), None, tasks).outcomes
    }

    /// See [`some_timed`](crate::some_timed).
    pub fn some_timed<I, K>(
        &self,
        timeout: Duration,
        wanted: usize,
        tasks: I,
    ) -> (Vec<Outcome<K::Output>>, bool)
    where
        I: IntoIterator<Item = K>,
        K: Task,
    {
        self.report(Policy::Some(wanted), Some(timeout), tasks).into_parts()
    }
}
