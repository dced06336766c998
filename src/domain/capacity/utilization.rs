use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};

use crate::api::report_dto::UtilizationReportDto;
use crate::domain::booking::Booking;
use crate::domain::capacity::capacity_report::CapacityReport;
use crate::domain::schedule::operating_window::OperatingWindow;
use crate::domain::utils::id::FacilityId;
use crate::error::Result;

/// Booked load measured against the theoretical capacity of a [`CapacityReport`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtilizationReport {
    /// `total_capacity` of the underlying capacity report.
    pub possible_capacity: i64,

    /// Bookings of the reported facilities that start a grid slot inside the range.
    pub booked: i64,

    /// Bookings beyond `room_count` in their slot.
    pub overbooked: i64,

    /// Room slots nobody booked.
    pub free: i64,

    /// Ratio of used room slots to `possible_capacity` (0.0 to 1.0).
    pub utilization: f64,
}

/// Measures how much of `report`'s capacity the given bookings use.
///
/// Bookings for facilities outside the report, outside its date range or not
/// starting a slot of `window`'s grid are ignored, the same way the
/// availability calculator ignores them.
pub fn analyze_utilization<'a>(report: &CapacityReport, window: &OperatingWindow, bookings: impl IntoIterator<Item = &'a Booking>) -> Result<UtilizationReport> {
    let range = report.range()?;
    let grid = window.grid();

    let room_counts: HashMap<&FacilityId, i64> = report.facilities.iter().map(|facility| (&facility.facility_id, facility.room_count)).collect();

    let mut loads: HashMap<(&FacilityId, NaiveDate, NaiveTime), i64> = HashMap::new();
    let mut ignored: usize = 0;

    for booking in bookings {
        let facility_id = match room_counts.get_key_value(&booking.facility_id) {
            Some((facility_id, _)) if range.contains(booking.date) && grid.contains(booking.time_of_day) => *facility_id,
            _ => {
                ignored += 1;
                continue;
            }
        };

        *loads.entry((facility_id, booking.date, booking.time_of_day)).or_insert(0) += 1;
    }

    if ignored > 0 {
        log::debug!("Utilization for {}..={} ignored {} bookings outside the analysed facilities, dates or slot grid.", report.start_date, report.end_date, ignored);
    }

    let mut booked: i64 = 0;
    let mut overbooked: i64 = 0;

    for ((facility_id, _, _), load) in &loads {
        let room_count = room_counts.get(facility_id).copied().unwrap_or(0);
        booked += load;
        overbooked += (load - room_count).max(0);
    }

    let used = booked - overbooked;
    let possible_capacity = report.total_capacity;
    let free = (possible_capacity - used).max(0);

    let utilization = if possible_capacity > 0 { used as f64 / possible_capacity as f64 } else { 0.0 };

    Ok(UtilizationReport { possible_capacity, booked, overbooked, free, utilization })
}

impl UtilizationReport {
    pub fn to_dto(&self) -> UtilizationReportDto {
        UtilizationReportDto {
            possible_capacity: self.possible_capacity,
            booked: self.booked,
            free: self.free,
            overbooked: self.overbooked,
            utilization: self.utilization,
        }
    }
}
