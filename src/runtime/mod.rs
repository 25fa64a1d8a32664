//! The shared aggregation engine.
//!
//! - [`abandon`]: one-shot "stop listening" signal
//! - [`deadline`]: one-shot timer raced against the completion channel
//! - `launcher`: one thread per task, panics converted to faults
//! - `session`: per-invocation channel, signal and deadline

pub mod abandon;
pub mod deadline;
pub(crate) mod launcher;
pub(crate) mod session;

pub use abandon::AbandonSignal;
pub use deadline::Deadline;
