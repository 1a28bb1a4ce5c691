//! Batch loading and application against an ingested employee list.

use chrono::NaiveDate;
use roster_cli::batch::{apply_batch, load_batch};
use roster_ingest::read_employees_from_reader;
use roster_model::{DateRange, DayHalf, RosterTable};

#[test]
fn batch_file_round_trips_through_the_table() {
    let employees =
        read_employees_from_reader("FullName,Position\nAnna,Quản lý\nBao,Phục vụ\n".as_bytes())
            .unwrap();
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let range = DateRange::new(start, start).unwrap();
    let mut table = RosterTable::build(employees, range);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assignments.json");
    std::fs::write(
        &path,
        r#"[
            {"employee": "Anna", "day": "01-03", "half": "morning", "code": "Q1"},
            {"employee": "Anna", "day": "01-03", "half": "afternoon", "code": "C1"},
            {"employee": 1, "day": "01-03", "half": "afternoon", "code": "C2"}
        ]"#,
    )
    .unwrap();

    let entries = load_batch(&path).unwrap();
    let outcome = apply_batch(&mut table, &entries);
    assert_eq!(outcome.applied, 2);
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(table.row(0).unwrap().slot(0, DayHalf::Morning), "Q1");
    assert_eq!(table.row(0).unwrap().slot(0, DayHalf::Afternoon), "");
    assert_eq!(table.row(1).unwrap().slot(0, DayHalf::Afternoon), "C2");
}

#[test]
fn malformed_batch_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assignments.json");
    std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();
    assert!(load_batch(&path).is_err());
}
