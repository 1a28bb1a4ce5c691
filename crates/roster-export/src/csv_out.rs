use std::io::Write;

use crate::error::Result;
use crate::project::ExportRecord;

/// Write the export rectangle as CSV: `FullName`, `Position`, then one
/// `DD-MM` column per day.
pub fn write_csv<W: Write>(records: &[ExportRecord], labels: &[String], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut header = vec!["FullName", "Position"];
    header.extend(labels.iter().map(String::as_str));
    csv_writer.write_record(&header)?;
    for record in records {
        let mut row = vec![record.full_name.as_str(), record.position.as_str()];
        row.extend(record.days.iter().map(String::as_str));
        csv_writer.write_record(&row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// The CSV rectangle as a string, for previews and tests.
pub fn csv_text(records: &[ExportRecord], labels: &[String]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(records, labels, &mut buffer)?;
    // The writer only emits UTF-8.
    String::from_utf8(buffer)
        .map_err(|error| std::io::Error::new(std::io::ErrorKind::InvalidData, error).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_carries_day_labels() {
        let records = vec![ExportRecord {
            full_name: "Anna".to_string(),
            position: "Quản lý".to_string(),
            days: vec!["Q1".to_string(), String::new()],
        }];
        let labels = vec!["01-03".to_string(), "02-03".to_string()];
        let text = csv_text(&records, &labels).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("FullName,Position,01-03,02-03"));
        assert_eq!(lines.next(), Some("Anna,Quản lý,Q1,"));
        assert_eq!(lines.next(), None);
    }
}
