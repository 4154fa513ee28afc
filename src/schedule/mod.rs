//! Scheduling module
//!
//! This module turns the free-form expressions users type into dates:
//! - Due-date specs ("friday", "tomorrow", "15", "2017-06-15")
//! - Recurrence specs ("2 weeks", "monday,thursday")

pub mod date_spec;
pub mod recurrence;

use thiserror::Error;

/// Errors raised when a date or schedule expression cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("{0} is not a valid date.")]
    InvalidDateSpec(String),

    #[error("{0} is not a valid schedule.")]
    InvalidRecurrenceSpec(String),
}
