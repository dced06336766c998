use chrono::NaiveDate;

use crate::api::report_dto::{CapacityReportDto, FacilityCapacityDto};
use crate::domain::capacity::date_range::DateRange;
use crate::domain::facility::Facility;
use crate::domain::schedule::operating_window::OperatingWindow;
use crate::domain::utils::id::FacilityId;
use crate::domain::utils::normalize::format_date;
use crate::error::{Error, Result};

/// Theoretical capacity of one facility over the analysed range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityCapacity {
    pub facility_id: FacilityId,
    pub room_count: i64,
    pub capacity: i64,
}

/// Result of [`analyze_capacity`].
///
/// `total_capacity` is an upper bound: it is what the facilities could host if
/// every room were used in every slot of every day. Existing bookings,
/// holidays, closures and facility specific opening hours are not considered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub slots_per_day: i64,
    pub total_capacity: i64,
    pub facilities: Vec<FacilityCapacity>,
}

/// Computes the theoretical hearing capacity of `facilities` between
/// `start_date` and `end_date`, both inclusive.
///
/// `total_capacity = sum(room_count) * slots_per_day * days`, where
/// `slots_per_day` is the length of the window's slot grid (a trailing partial
/// slot does not count).
///
/// Fails with `InvalidRange` when `start_date > end_date` or when the total
/// does not fit into an `i64`.
pub fn analyze_capacity<'a>(
    start_date: NaiveDate,
    end_date: NaiveDate,
    window: &OperatingWindow,
    facilities: impl IntoIterator<Item = &'a Facility>,
) -> Result<CapacityReport> {
    let range = DateRange::new(start_date, end_date)?;
    let days = range.days();
    let slots_per_day = window.slots_per_day();

    let slots_in_range = slots_per_day.checked_mul(days).ok_or_else(|| overflow(&range))?;

    let mut facility_capacities = Vec::new();
    let mut total_capacity: i64 = 0;

    for facility in facilities {
        let capacity = facility.room_count().checked_mul(slots_in_range).ok_or_else(|| overflow(&range))?;
        total_capacity = total_capacity.checked_add(capacity).ok_or_else(|| overflow(&range))?;

        facility_capacities.push(FacilityCapacity { facility_id: facility.id().clone(), room_count: facility.room_count(), capacity });
    }

    log::debug!(
        "Capacity {}..={}: {} facilities, {} days, {} slots per day, total {}.",
        start_date,
        end_date,
        facility_capacities.len(),
        days,
        slots_per_day,
        total_capacity
    );

    Ok(CapacityReport { start_date, end_date, days, slots_per_day, total_capacity, facilities: facility_capacities })
}

fn overflow(range: &DateRange) -> Error {
    Error::InvalidRange(format!("capacity between {} and {} exceeds the representable range", range.start_date(), range.end_date()))
}

impl CapacityReport {
    pub fn range(&self) -> Result<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }

    pub fn capacity_of(&self, facility_id: &FacilityId) -> Option<&FacilityCapacity> {
        self.facilities.iter().find(|facility| &facility.facility_id == facility_id)
    }

    pub fn to_dto(&self) -> CapacityReportDto {
        CapacityReportDto {
            start_date: format_date(self.start_date),
            end_date: format_date(self.end_date),
            days: self.days,
            slots_per_day: self.slots_per_day,
            total_capacity: self.total_capacity,
            facilities: self
                .facilities
                .iter()
                .map(|facility| FacilityCapacityDto {
                    facility_id: facility.facility_id.to_string(),
                    room_count: facility.room_count,
                    capacity: facility.capacity,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn facility(id: &str, room_count: i64) -> Facility {
        Facility::new(FacilityId::new(id), id, room_count).unwrap()
    }

    #[test]
    fn two_facilities_over_two_days() {
        let facilities = vec![facility("up-01", 1), facility("up-02", 3)];

        let report = analyze_capacity(date(1), date(2), &OperatingWindow::default(), &facilities).unwrap();

        assert_eq!(report.slots_per_day, 36);
        assert_eq!(report.days, 2);
        assert_eq!(report.total_capacity, 288);
        assert_eq!(report.capacity_of(&FacilityId::new("up-02")).map(|f| f.capacity), Some(216));
    }

    #[test]
    fn single_day_range_has_one_day() {
        let facilities = vec![facility("up-01", 2)];

        let report = analyze_capacity(date(1), date(1), &OperatingWindow::default(), &facilities).unwrap();

        assert_eq!(report.days, 1);
        assert_eq!(report.total_capacity, 72);
    }

    #[test]
    fn capacity_is_additive_over_facilities() {
        let window = OperatingWindow::default().with_interval(30).unwrap();
        let a = facility("up-01", 2);
        let b = facility("up-02", 5);

        let both = analyze_capacity(date(3), date(9), &window, [&a, &b]).unwrap();
        let only_a = analyze_capacity(date(3), date(9), &window, [&a]).unwrap();
        let only_b = analyze_capacity(date(3), date(9), &window, [&b]).unwrap();

        assert_eq!(both.total_capacity, only_a.total_capacity + only_b.total_capacity);
    }

    #[test]
    fn trailing_partial_slot_is_not_counted() {
        let start = chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let end = chrono::NaiveTime::from_hms_opt(9, 50, 0).unwrap();
        let window = OperatingWindow::new(start, end, 15).unwrap();

        let report = analyze_capacity(date(1), date(1), &window, &[facility("up-01", 1)]).unwrap();

        assert_eq!(report.slots_per_day, 3);
        assert_eq!(report.total_capacity, 3);
    }

    #[test]
    fn empty_facility_set_has_zero_capacity() {
        let no_facilities: Vec<Facility> = Vec::new();
        let report = analyze_capacity(date(1), date(5), &OperatingWindow::default(), &no_facilities).unwrap();

        assert_eq!(report.total_capacity, 0);
        assert_eq!(report.days, 5);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let result = analyze_capacity(date(2), date(1), &OperatingWindow::default(), &[facility("up-01", 1)]);
        assert!(matches!(result, Err(Error::InvalidRange(_))));
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let huge = facility("up-01", i64::MAX / 2);
        let result = analyze_capacity(date(1), date(2), &OperatingWindow::default(), &[huge]);

        assert!(matches!(result, Err(Error::InvalidRange(_))));
    }
}
