//! Roster export.
//!
//! Projects the two-slot-per-day roster table down to one merged cell
//! per day and writes the result as an XLSX workbook or a CSV rectangle.
//! The projection is lossy by design (two codes join into one
//! human-readable string); there is no re-import path.

mod csv_out;
mod error;
mod project;
mod xlsx;

pub use csv_out::{csv_text, write_csv};
pub use error::{ExportError, Result};
pub use project::{ExportRecord, merge_codes, project};
pub use xlsx::{XlsxOptions, write_xlsx, xlsx_bytes};
