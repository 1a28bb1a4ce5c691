use serde::{Deserialize, Serialize};

use roster_model::{DayHalf, RosterTable};

/// One exported row: the employee columns followed by one merged cell
/// per day in the table's range, in range order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub full_name: String,
    pub position: String,
    pub days: Vec<String>,
}

/// Join the two slot values of one day with a single space and trim.
/// `("Q1", "C2")` → `"Q1 C2"`, `("Q1", "")` → `"Q1"`, `("", "C2")` →
/// `"C2"`, both empty → `""`. Never produces leading or trailing spaces.
pub fn merge_codes(morning: &str, afternoon: &str) -> String {
    format!("{} {}", morning.trim(), afternoon.trim())
        .trim()
        .to_string()
}

/// Flatten the table into export records, one per employee row, days in
/// the table's stored order. Pure read: repeated calls over the same
/// table state yield identical output.
pub fn project(table: &RosterTable) -> Vec<ExportRecord> {
    let day_count = table.range().day_count();
    table
        .snapshot()
        .iter()
        .map(|row| {
            let days = (0..day_count)
                .map(|day| {
                    merge_codes(row.slot(day, DayHalf::Morning), row.slot(day, DayHalf::Afternoon))
                })
                .collect();
            ExportRecord {
                full_name: row.employee.full_name.clone(),
                position: row.employee.position.clone(),
                days,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_cases() {
        assert_eq!(merge_codes("Q1", "C2"), "Q1 C2");
        assert_eq!(merge_codes("Q1", ""), "Q1");
        assert_eq!(merge_codes("", "C2"), "C2");
        assert_eq!(merge_codes("", ""), "");
        assert_eq!(merge_codes(" Q1 ", "  "), "Q1");
    }

    #[test]
    fn merged_tokens_split_back_in_order() {
        // The one machine-checkable round-trip property of the lossy
        // merge: whitespace split recovers the non-empty tokens in
        // order, and empty slots contribute none.
        let cases = [("S1", "C3"), ("Q2", ""), ("", "B5"), ("", "")];
        for (morning, afternoon) in cases {
            let merged = merge_codes(morning, afternoon);
            let tokens: Vec<&str> = merged.split_whitespace().collect();
            let expected: Vec<&str> = [morning, afternoon]
                .into_iter()
                .filter(|code| !code.is_empty())
                .collect();
            assert_eq!(tokens, expected, "{morning:?}/{afternoon:?}");
        }
    }
}
