//! Assignment batch files.
//!
//! A batch is a JSON array of slot edits applied to a freshly built
//! roster before rendering or export. Rejections are local and
//! non-fatal: the offending entry is skipped with a warning and the
//! prior slot value stays in place, exactly as an interactive grid
//! would refuse the edit.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use roster_model::{DayHalf, RosterTable};

/// One requested slot edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentEntry {
    pub employee: EmployeeRef,
    /// Day label within the roster range, formatted `DD-MM`.
    pub day: String,
    pub half: DayHalf,
    pub code: String,
}

/// Employee selector: a row index or an exact `FullName`. Duplicate
/// names resolve to the first matching row (input order is stable).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployeeRef {
    Index(usize),
    Name(String),
}

impl std::fmt::Display for EmployeeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeRef::Index(index) => write!(f, "#{index}"),
            EmployeeRef::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Result of applying a batch: how many entries landed and which were
/// skipped, with the reason.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub applied: usize,
    pub rejected: Vec<RejectedEntry>,
}

#[derive(Debug)]
pub struct RejectedEntry {
    pub entry_number: usize,
    pub reason: String,
}

/// Load a batch file.
pub fn load_batch(path: &Path) -> anyhow::Result<Vec<AssignmentEntry>> {
    let text = std::fs::read_to_string(path)?;
    let entries: Vec<AssignmentEntry> = serde_json::from_str(&text)?;
    debug!(path = %path.display(), entry_count = entries.len(), "assignment batch loaded");
    Ok(entries)
}

/// Apply every entry in order. Never fails: each entry either mutates
/// its slot or is recorded as rejected.
pub fn apply_batch(table: &mut RosterTable, entries: &[AssignmentEntry]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for (idx, entry) in entries.iter().enumerate() {
        let entry_number = idx + 1;
        match apply_entry(table, entry) {
            Ok(()) => outcome.applied += 1,
            Err(reason) => {
                warn!(
                    entry_number,
                    employee = %entry.employee,
                    day = %entry.day,
                    half = %entry.half,
                    code = %entry.code,
                    %reason,
                    "assignment rejected"
                );
                outcome.rejected.push(RejectedEntry {
                    entry_number,
                    reason,
                });
            }
        }
    }
    outcome
}

fn apply_entry(table: &mut RosterTable, entry: &AssignmentEntry) -> Result<(), String> {
    let employee_index = resolve_employee(table, &entry.employee)?;
    let day_index = table
        .range()
        .label_index(&entry.day)
        .ok_or_else(|| format!("day {:?} is not in the roster range", entry.day))?;
    table
        .set_slot(employee_index, day_index, entry.half, &entry.code)
        .map_err(|rejection| rejection.to_string())
}

fn resolve_employee(table: &RosterTable, employee: &EmployeeRef) -> Result<usize, String> {
    match employee {
        EmployeeRef::Index(index) => {
            if *index < table.row_count() {
                Ok(*index)
            } else {
                Err(format!(
                    "employee index {index} out of bounds ({} rows)",
                    table.row_count()
                ))
            }
        }
        EmployeeRef::Name(name) => table
            .snapshot()
            .iter()
            .position(|row| row.employee.full_name == *name)
            .ok_or_else(|| format!("no employee named {name:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use roster_model::{DateRange, Employee};

    fn table() -> RosterTable {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        RosterTable::build(
            vec![
                Employee::new("Anna", "Quản lý"),
                Employee::new("Bao", "Phục vụ"),
            ],
            DateRange::new(start, end).unwrap(),
        )
    }

    fn entry(employee: EmployeeRef, day: &str, half: DayHalf, code: &str) -> AssignmentEntry {
        AssignmentEntry {
            employee,
            day: day.to_string(),
            half,
            code: code.to_string(),
        }
    }

    #[test]
    fn entries_parse_with_index_or_name() {
        let json = r#"[
            {"employee": 0, "day": "01-03", "half": "morning", "code": "Q1"},
            {"employee": "Bao", "day": "02-03", "half": "afternoon", "code": "C2"}
        ]"#;
        let entries: Vec<AssignmentEntry> = serde_json::from_str(json).unwrap();
        assert!(matches!(entries[0].employee, EmployeeRef::Index(0)));
        assert!(matches!(entries[1].half, DayHalf::Afternoon));
    }

    #[test]
    fn batch_applies_legal_entries_and_skips_the_rest() {
        let mut table = table();
        let entries = vec![
            entry(EmployeeRef::Name("Anna".to_string()), "01-03", DayHalf::Morning, "Q1"),
            // Manager afternoon: locked.
            entry(EmployeeRef::Index(0), "01-03", DayHalf::Afternoon, "C1"),
            entry(EmployeeRef::Index(1), "02-03", DayHalf::Afternoon, "C2"),
            // Unknown day label.
            entry(EmployeeRef::Index(1), "15-03", DayHalf::Morning, "S1"),
            // Unknown name.
            entry(EmployeeRef::Name("Chi".to_string()), "01-03", DayHalf::Morning, "B1"),
        ];
        let outcome = apply_batch(&mut table, &entries);
        assert_eq!(outcome.applied, 2);
        assert_eq!(outcome.rejected.len(), 3);
        assert_eq!(outcome.rejected[0].entry_number, 2);
        assert_eq!(table.row(0).unwrap().slot(0, DayHalf::Morning), "Q1");
        assert_eq!(table.row(1).unwrap().slot(1, DayHalf::Afternoon), "C2");
        assert_eq!(table.row(0).unwrap().slot(0, DayHalf::Afternoon), "");
    }
}
