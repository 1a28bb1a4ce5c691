use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use roster_model::Employee;

use crate::error::{IngestError, Result};
use crate::{FULL_NAME_COLUMN, POSITION_COLUMN};

/// Read the employee list from a CSV file on disk.
pub fn read_employees(path: &Path) -> Result<Vec<Employee>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    let employees = read_from_csv(reader)?;
    debug!(
        path = %path.display(),
        employee_count = employees.len(),
        "employee list loaded"
    );
    Ok(employees)
}

/// Read the employee list from any reader (an upload buffer, a test
/// fixture string).
pub fn read_employees_from_reader<R: Read>(input: R) -> Result<Vec<Employee>> {
    let reader = csv::ReaderBuilder::new().has_headers(true).from_reader(input);
    read_from_csv(reader)
}

fn read_from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Employee>> {
    let headers = reader.headers()?.clone();
    // Header names are matched exactly after trimming surrounding
    // whitespace; matching is case-sensitive.
    let name_idx = column_index(&headers, FULL_NAME_COLUMN)?;
    let position_idx = column_index(&headers, POSITION_COLUMN)?;

    let mut employees = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let full_name = record.get(name_idx).unwrap_or("").trim();
        let position = record.get(position_idx).unwrap_or("").trim();
        if full_name.is_empty() {
            warn!(record_number = idx + 1, "employee record has empty FullName");
        }
        employees.push(Employee::new(full_name, position));
    }
    Ok(employees)
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.trim() == name)
        .ok_or(IngestError::MissingColumn { name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_both_required_columns() {
        let csv = "FullName,Position\nAnna,Quản lý\nBao,Phục vụ\n";
        let employees = read_employees_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0], Employee::new("Anna", "Quản lý"));
        assert_eq!(employees[1], Employee::new("Bao", "Phục vụ"));
    }

    #[test]
    fn headers_are_trimmed_and_extra_columns_ignored() {
        let csv = "Id, FullName ,Dept, Position \n7,Chi,K,Bếp\n";
        let employees = read_employees_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(employees, vec![Employee::new("Chi", "Bếp")]);
    }

    #[test]
    fn header_match_is_case_sensitive() {
        let csv = "fullname,Position\nAnna,Quản lý\n";
        let error = read_employees_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            error,
            IngestError::MissingColumn {
                name: "FullName"
            }
        ));
    }

    #[test]
    fn missing_position_column_is_fatal() {
        let csv = "FullName\nAnna\n";
        let error = read_employees_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            error,
            IngestError::MissingColumn { name: "Position" }
        ));
    }

    #[test]
    fn values_are_trimmed_and_blank_names_kept() {
        let csv = "FullName,Position\n  Anna  , Quản lý \n,Phục vụ\n";
        let employees = read_employees_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(employees[0], Employee::new("Anna", "Quản lý"));
        assert_eq!(employees[1], Employee::new("", "Phục vụ"));
    }
}
