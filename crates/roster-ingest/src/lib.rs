//! Employee list ingestion.
//!
//! Reads the uploaded employee CSV into [`roster_model::Employee`]
//! records. The file must carry `FullName` and `Position` columns
//! (matched exactly after trimming surrounding whitespace from the
//! header); a missing column is fatal for the whole session and no
//! partial roster is built.

mod employee_csv;
mod error;

pub use employee_csv::{read_employees, read_employees_from_reader};
pub use error::{IngestError, Result};

/// Required header for the employee's display name.
pub const FULL_NAME_COLUMN: &str = "FullName";
/// Required header for the free-text position.
pub const POSITION_COLUMN: &str = "Position";
