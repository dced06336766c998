use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl DateRange {
    /// Fails with `InvalidRange` when `start_date > end_date`. A single day
    /// (`start_date == end_date`) is a valid range.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self> {
        if start_date > end_date {
            return Err(Error::InvalidRange(format!("start date {} is after end date {}", start_date, end_date)));
        }

        Ok(DateRange { start_date, end_date })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Number of days covered, counting both endpoints.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> {
        let end_date = self.end_date;
        self.start_date.iter_days().take_while(move |date| *date <= end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_day_range_counts_one_day() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 1)).unwrap();

        assert_eq!(range.days(), 1);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![date(2024, 1, 1)]);
    }

    #[test]
    fn range_across_leap_day_counts_both_ends() {
        let range = DateRange::new(date(2024, 2, 27), date(2024, 3, 1)).unwrap();

        assert_eq!(range.days(), 4);
        assert_eq!(range.iter().count(), 4);
        assert!(range.contains(date(2024, 2, 29)));
        assert!(!range.contains(date(2024, 3, 2)));
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert!(matches!(DateRange::new(date(2024, 1, 2), date(2024, 1, 1)), Err(Error::InvalidRange(_))));
    }
}
