//! Core value types shared by every combinator.
//!
//! - [`outcome`]: Three-state task outcome and its position-tagged form
//! - [`report`]: Terminal state and result of one aggregation session

pub mod outcome;
pub mod report;

pub use outcome::{Indexed, Outcome};
pub use report::{Report, Settlement};
