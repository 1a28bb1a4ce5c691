use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Inclusive calendar range the roster covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `end < start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(RosterError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn day_count(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// Ordered inclusive day sequence.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let mut current = Some(self.start);
        std::iter::from_fn(move || {
            let day = current?;
            current = if day < self.end {
                day.checked_add_days(Days::new(1))
            } else {
                None
            };
            Some(day)
        })
    }

    /// Column labels for the range, one per day, formatted `DD-MM`.
    pub fn labels(&self) -> Vec<String> {
        self.days().map(day_label).collect()
    }

    /// Position of a day within the range, if it falls inside.
    pub fn day_index(&self, day: NaiveDate) -> Option<usize> {
        if day < self.start || day > self.end {
            return None;
        }
        Some((day - self.start).num_days() as usize)
    }

    /// Resolve a `DD-MM` label back to its day index. Labels carry no
    /// year, so this walks the range rather than parsing a date.
    pub fn label_index(&self, label: &str) -> Option<usize> {
        let wanted = label.trim();
        self.days().position(|day| day_label(day) == wanted)
    }
}

/// Zero-padded `DD-MM` label, no year.
pub fn day_label(day: NaiveDate) -> String {
    day.format("%d-%m").to_string()
}
