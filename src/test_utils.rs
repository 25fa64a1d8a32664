//! Helpers for unit and integration tests.
//!
//! Compiled under `cfg(test)` or the `test-internals` feature.

use std::sync::Once;
use std::thread;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::error::Fault;
use crate::task::{self, BoxTask};

static INIT_LOGGING: Once = Once::new();

/// Installs a test-writer `tracing` subscriber once per process.
///
/// Honors `RUST_LOG`; defaults to `brickwall=trace`. Events only appear when
/// the crate is built with `tracing-integration`.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("brickwall=trace"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// A task that sleeps `millis` then returns `value`.
pub fn sleepy<T: Send + 'static>(value: T, millis: u64) -> BoxTask<T> {
    task::boxed(move || {
        thread::sleep(Duration::from_millis(millis));
        Ok(value)
    })
}

/// A task that sleeps `millis` then returns a task fault.
pub fn failing<T: Send + 'static>(description: &'static str, millis: u64) -> BoxTask<T> {
    task::boxed(move || {
        thread::sleep(Duration::from_millis(millis));
        Err(Fault::task(description))
    })
}

/// A task that panics with `message` immediately.
pub fn panicking<T: Send + 'static>(message: &'static str) -> BoxTask<T> {
    task::boxed(move || -> Result<T, Fault> { panic!("{message}") })
}
