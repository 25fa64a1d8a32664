//! Optional tracing integration.
//!
//! With the `tracing-integration` feature the macros below are the ones from
//! the `tracing` crate. Without it they expand to nothing, so a default
//! build emits no diagnostics and pays nothing for them.

#[cfg(feature = "tracing-integration")]
pub(crate) use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing-integration"))]
macro_rules! debug {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing-integration"))]
macro_rules! trace {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing-integration"))]
macro_rules! noop_warn {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "tracing-integration"))]
pub(crate) use {debug, trace};

// `warn` collides with the builtin lint attribute, so it is renamed on export.
#[cfg(not(feature = "tracing-integration"))]
pub(crate) use noop_warn as warn;
