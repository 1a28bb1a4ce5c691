use serde::{Deserialize, Serialize};

use crate::dates::DateRange;
use crate::error::RejectedAssignment;
use crate::role::{Employee, Role};
use crate::shift::{self, DayHalf};

/// One roster row: an employee, the role classified at build time, and
/// two slot values per day in the range (empty string = unassigned).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRow {
    pub employee: Employee,
    pub role: Role,
    slots: Vec<String>,
}

impl RosterRow {
    /// Slot value for a day and half. Empty string when unassigned.
    pub fn slot(&self, day_index: usize, half: DayHalf) -> &str {
        &self.slots[slot_offset(day_index, half)]
    }
}

/// The full matrix of shift assignments for all employees across a date
/// range. Rebuilt wholesale whenever the employee list or range changes;
/// mutated only through [`RosterTable::set_slot`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterTable {
    range: DateRange,
    rows: Vec<RosterRow>,
}

impl RosterTable {
    /// Build a table with every slot unassigned.
    pub fn build(employees: Vec<Employee>, range: DateRange) -> Self {
        let slot_count = range.day_count() * 2;
        let rows = employees
            .into_iter()
            .map(|employee| {
                let role = employee.role();
                RosterRow {
                    employee,
                    role,
                    slots: vec![String::new(); slot_count],
                }
            })
            .collect();
        Self { range, rows }
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Read-only view of all rows, in input order.
    pub fn snapshot(&self) -> &[RosterRow] {
        &self.rows
    }

    pub fn row(&self, employee_index: usize) -> Option<&RosterRow> {
        self.rows.get(employee_index)
    }

    /// Write one slot. Succeeds only when the slot is editable for the
    /// employee's role and the trimmed code is legal; any failure leaves
    /// the table untouched.
    pub fn set_slot(
        &mut self,
        employee_index: usize,
        day_index: usize,
        half: DayHalf,
        code: &str,
    ) -> Result<(), RejectedAssignment> {
        let rows = self.rows.len();
        let days = self.range.day_count();
        let row = self
            .rows
            .get_mut(employee_index)
            .ok_or(RejectedAssignment::EmployeeOutOfBounds {
                index: employee_index,
                rows,
            })?;
        if day_index >= days {
            return Err(RejectedAssignment::DayOutOfBounds {
                index: day_index,
                days,
            });
        }
        if !shift::is_editable(row.role, half) {
            return Err(RejectedAssignment::NotEditable {
                role: row.role,
                half,
            });
        }
        let trimmed = code.trim();
        if !shift::is_legal(row.role, half, trimmed) {
            return Err(RejectedAssignment::IllegalCode {
                role: row.role,
                half,
                code: code.to_string(),
            });
        }
        row.slots[slot_offset(day_index, half)] = trimmed.to_string();
        Ok(())
    }
}

fn slot_offset(day_index: usize, half: DayHalf) -> usize {
    day_index * 2
        + match half {
            DayHalf::Morning => 0,
            DayHalf::Afternoon => 1,
        }
}
