//! The task contract.
//!
//! A task is a zero-argument callable that produces exactly one
//! `Result<T, Fault>`. `FnOnce` guarantees a task is never invoked twice;
//! the engine moves each task into its own thread and invokes it there.

use crate::error::Fault;

/// A unit of work a combinator can run.
///
/// Implemented for every `FnOnce() -> Result<T, Fault> + Send + 'static`,
/// including [`BoxTask`], so closures can be passed directly.
pub trait Task: Send + 'static {
    /// The success payload.
    type Output: Send + 'static;

    /// Runs the task to completion.
    fn run(self) -> Result<Self::Output, Fault>;
}

impl<F, T> Task for F
where
    F: FnOnce() -> Result<T, Fault> + Send + 'static,
    T: Send + 'static,
{
    type Output = T;

    fn run(self) -> Result<T, Fault> {
        self()
    }
}

/// A type-erased task, for mixing different closures in one collection.
pub type BoxTask<T> = Box<dyn FnOnce() -> Result<T, Fault> + Send + 'static>;

/// Boxes a closure into a [`BoxTask`].
///
/// ```
/// use brickwall::{BoxTask, Fault, task};
///
/// let tasks: Vec<BoxTask<u32>> = vec![
///     task::boxed(|| Ok(1)),
///     task::boxed(|| Err(Fault::task("unavailable"))),
/// ];
/// assert_eq!(tasks.len(), 2);
/// ```
pub fn boxed<T, F>(f: F) -> BoxTask<T>
where
    F: FnOnce() -> Result<T, Fault> + Send + 'static,
{
    Box::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_tasks() {
        let task = || Ok::<_, Fault>(5);
        assert_eq!(task.run(), Ok(5));
    }

    #[test]
    fn boxed_tasks_are_tasks() {
        let task: BoxTask<&str> = boxed(|| Err(Fault::task("nope")));
        assert_eq!(task.run(), Err(Fault::task("nope")));
    }
}
