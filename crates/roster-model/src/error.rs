use chrono::NaiveDate;
use thiserror::Error;

use crate::role::Role;
use crate::shift::DayHalf;

/// Non-fatal refusal of a single slot write. The table is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectedAssignment {
    #[error("{role} slots are not editable in the {half}")]
    NotEditable { role: Role, half: DayHalf },
    #[error("code {code:?} is not legal for {role} in the {half}")]
    IllegalCode {
        role: Role,
        half: DayHalf,
        code: String,
    },
    #[error("employee index {index} out of bounds ({rows} rows)")]
    EmployeeOutOfBounds { index: usize, rows: usize },
    #[error("day index {index} out of bounds ({days} days)")]
    DayOutOfBounds { index: usize, days: usize },
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("invalid date range: end {end} is before start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error(transparent)]
    Rejected(#[from] RejectedAssignment),
}

pub type Result<T> = std::result::Result<T, RosterError>;
