use chrono::NaiveTime;

use crate::api::operating_window_dto::OperatingWindowDto;
use crate::domain::schedule::slot_grid::{SlotGrid, generate_grid};
use crate::domain::utils::normalize::{format_time_of_day, parse_time_of_day};
use crate::error::Result;

pub const DEFAULT_INTERVAL_MINUTES: i64 = 15;

/// Daily window in which hearings can be scheduled, split into slots of
/// `interval_minutes`.
///
/// The fields are only reachable through [`OperatingWindow::new`], so every
/// value of this type satisfies `start_time < end_time` and a positive interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingWindow {
    start_time: NaiveTime,
    end_time: NaiveTime,
    interval_minutes: i64,
    grid: SlotGrid,
}

impl OperatingWindow {
    pub fn new(start_time: NaiveTime, end_time: NaiveTime, interval_minutes: i64) -> Result<Self> {
        let grid = generate_grid(start_time, end_time, interval_minutes)?;
        Ok(OperatingWindow { start_time, end_time, interval_minutes, grid })
    }

    pub fn from_dto(dto: &OperatingWindowDto) -> Result<Self> {
        let start_time = parse_time_of_day(&dto.start_time)?;
        let end_time = parse_time_of_day(&dto.end_time)?;
        Self::new(start_time, end_time, dto.interval_minutes)
    }

    pub fn to_dto(&self) -> OperatingWindowDto {
        OperatingWindowDto {
            start_time: format_time_of_day(self.start_time),
            end_time: format_time_of_day(self.end_time),
            interval_minutes: self.interval_minutes,
        }
    }

    /// Same bounds, different slot width.
    pub fn with_interval(&self, interval_minutes: i64) -> Result<Self> {
        Self::new(self.start_time, self.end_time, interval_minutes)
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn interval_minutes(&self) -> i64 {
        self.interval_minutes
    }

    pub fn grid(&self) -> SlotGrid {
        self.grid
    }

    pub fn slots_per_day(&self) -> i64 {
        self.grid.len() as i64
    }
}

impl Default for OperatingWindow {
    /// 09:00 to 18:00 in 15 minute slots.
    fn default() -> Self {
        let start_time = NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default();
        let end_time = NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default();

        // The literals above always form a valid window.
        match Self::new(start_time, end_time, DEFAULT_INTERVAL_MINUTES) {
            Ok(window) => window,
            Err(e) => unreachable!("default operating window is invalid: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn default_window_is_nine_to_six_in_quarter_hours() {
        let window = OperatingWindow::default();

        assert_eq!(window.start_time(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(window.end_time(), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        assert_eq!(window.interval_minutes(), 15);
        assert_eq!(window.slots_per_day(), 36);
    }

    #[test]
    fn with_interval_keeps_bounds() {
        let window = OperatingWindow::default().with_interval(30).unwrap();

        assert_eq!(window.slots_per_day(), 18);
        assert_eq!(window.start_time(), OperatingWindow::default().start_time());
    }

    #[test]
    fn dto_with_bad_bounds_is_rejected() {
        let dto = OperatingWindowDto { start_time: "18:00".to_string(), end_time: "09:00".to_string(), interval_minutes: 15 };
        assert!(matches!(OperatingWindow::from_dto(&dto), Err(Error::InvalidWindow(_))));

        let dto = OperatingWindowDto { start_time: "nine".to_string(), end_time: "18:00".to_string(), interval_minutes: 15 };
        assert!(matches!(OperatingWindow::from_dto(&dto), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn dto_round_trip_keeps_short_time_format() {
        let dto = OperatingWindow::default().to_dto();

        assert_eq!(dto.start_time, "09:00");
        assert_eq!(dto.end_time, "18:00");
    }
}
