//! Grid-facing facade over the roster table.
//!
//! A presentation layer drives one `Session` per user: it queries
//! [`Session::cell_spec`] to render each cell as a constrained dropdown
//! and submits edits through [`Session::apply_edit`]. Replacing the
//! employee list or the date range rebuilds the table from scratch and
//! drops any edits made against the old table.

use crate::dates::DateRange;
use crate::error::RejectedAssignment;
use crate::role::Employee;
use crate::shift::{self, DayHalf};
use crate::table::RosterTable;

/// What a grid needs to render one editable cell: the selectable options
/// (empty string first, meaning "unassigned") and whether editing is
/// allowed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpec {
    pub options: &'static [&'static str],
    pub editable: bool,
}

/// Single-user editing session. Synchronous: each edit is validated and
/// applied or rejected before the next one is accepted.
#[derive(Debug, Clone)]
pub struct Session {
    employees: Vec<Employee>,
    range: DateRange,
    table: RosterTable,
}

impl Session {
    pub fn new(employees: Vec<Employee>, range: DateRange) -> Self {
        let table = RosterTable::build(employees.clone(), range);
        Self {
            employees,
            range,
            table,
        }
    }

    pub fn table(&self) -> &RosterTable {
        &self.table
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    /// Options and editability for every cell in the given row/half.
    /// All cells of one row share the spec because legality depends only
    /// on role and half, never on the day.
    pub fn cell_spec(&self, employee_index: usize, half: DayHalf) -> Option<CellSpec> {
        let row = self.table.row(employee_index)?;
        Some(CellSpec {
            options: shift::legal_codes(row.role, half),
            editable: shift::is_editable(row.role, half),
        })
    }

    /// Submit one edit. Rejections leave the table untouched.
    pub fn apply_edit(
        &mut self,
        employee_index: usize,
        day_index: usize,
        half: DayHalf,
        code: &str,
    ) -> Result<(), RejectedAssignment> {
        self.table.set_slot(employee_index, day_index, half, code)
    }

    /// Swap in a new employee list. Rebuilds the table; previous edits
    /// are discarded.
    pub fn set_employees(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
        self.rebuild();
    }

    /// Swap in a new date range. Rebuilds the table; previous edits are
    /// discarded.
    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.table = RosterTable::build(self.employees.clone(), self.range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;
    use chrono::NaiveDate;

    fn session() -> Session {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let range = DateRange::new(start, start).unwrap();
        Session::new(
            vec![
                Employee::new("Anna", "Quản lý"),
                Employee::new("Bao", "Phục vụ"),
            ],
            range,
        )
    }

    #[test]
    fn cell_spec_matches_catalog() {
        let session = session();
        let manager_pm = session.cell_spec(0, DayHalf::Afternoon).unwrap();
        assert!(!manager_pm.editable);
        assert_eq!(manager_pm.options, &[""]);
        let service_pm = session.cell_spec(1, DayHalf::Afternoon).unwrap();
        assert!(service_pm.editable);
        assert_eq!(service_pm.options, &["", "C1", "C2", "C3"]);
        assert!(session.cell_spec(5, DayHalf::Morning).is_none());
    }

    #[test]
    fn changing_the_range_discards_edits() {
        let mut session = session();
        session.apply_edit(1, 0, DayHalf::Morning, "S1").unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        session.set_range(DateRange::new(start, end).unwrap());
        assert_eq!(session.table().row(1).unwrap().slot(0, DayHalf::Morning), "");
        assert_eq!(session.table().range().day_count(), 2);
    }

    #[test]
    fn changing_employees_reclassifies_rows() {
        let mut session = session();
        session.set_employees(vec![Employee::new("Chi", "Bếp")]);
        let table = session.table();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.row(0).unwrap().role, Role::Other);
    }
}
