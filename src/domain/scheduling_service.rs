use chrono::{NaiveDate, NaiveTime};

use crate::domain::booking::Booking;
use crate::domain::capacity::capacity_report::{CapacityReport, analyze_capacity};
use crate::domain::capacity::utilization::{UtilizationReport, analyze_utilization};
use crate::domain::providers::{BookingSnapshotProvider, FacilityProvider};
use crate::domain::schedule::availability::slot_statuses;
use crate::domain::schedule::occupancy::Occupancy;
use crate::domain::schedule::operating_window::OperatingWindow;
use crate::domain::schedule::slot::SlotStatus;
use crate::domain::utils::id::FacilityId;
use crate::error::Result;

pub const ANALYTICS_TARGET: &str = "analytics";

/// Runs the data-fetch step through the providers, then the pure scheduling
/// functions on the fetched snapshot.
///
/// The service keeps no state between calls. Every call reads the providers
/// anew, so results are only as fresh as the providers make them.
pub struct SchedulingService<'a> {
    facilities: &'a dyn FacilityProvider,
    bookings: &'a dyn BookingSnapshotProvider,
    window: OperatingWindow,
}

impl<'a> SchedulingService<'a> {
    pub fn new(facilities: &'a dyn FacilityProvider, bookings: &'a dyn BookingSnapshotProvider, window: OperatingWindow) -> Self {
        SchedulingService { facilities, bookings, window }
    }

    pub fn window(&self) -> &OperatingWindow {
        &self.window
    }

    pub fn room_count(&self, facility_id: &FacilityId) -> Result<i64> {
        self.facilities.room_count(facility_id)
    }

    fn occupancy(&self, facility_id: &FacilityId, date: NaiveDate) -> Result<Occupancy> {
        let occupancy: Occupancy = self.bookings.booked_times(facility_id, date)?.into_iter().collect();

        let off_grid = occupancy.off_grid_times(&self.window.grid());
        if !off_grid.is_empty() {
            log::warn!(
                "Facility '{}' has bookings on {} outside the {} minute slot grid: {:?}. They do not reduce availability.",
                facility_id,
                date,
                self.window.interval_minutes(),
                off_grid
            );
        }

        Ok(occupancy)
    }

    /// Per-slot load of `facility_id` on `date`.
    pub fn slot_statuses(&self, facility_id: &FacilityId, date: NaiveDate) -> Result<Vec<SlotStatus>> {
        let room_count = self.facilities.room_count(facility_id)?;
        let occupancy = self.occupancy(facility_id, date)?;

        slot_statuses(self.window.grid(), &occupancy, room_count)
    }

    /// Slots of `date` in which `facility_id` still has a free room.
    pub fn available_slots(&self, facility_id: &FacilityId, date: NaiveDate) -> Result<Vec<NaiveTime>> {
        let statuses = self.slot_statuses(facility_id, date)?;
        let available: Vec<NaiveTime> = statuses.iter().filter(|status| status.is_available()).map(|status| status.time_of_day).collect();

        tracing::info!(
            target: ANALYTICS_TARGET,
            Facility = %facility_id,
            Date = %date,
            GridSlots = statuses.len(),
            AvailableSlots = available.len(),
            "Availability computed"
        );

        Ok(available)
    }

    /// Theoretical capacity of every provided facility between both dates, inclusive.
    pub fn capacity_report(&self, start_date: NaiveDate, end_date: NaiveDate) -> Result<CapacityReport> {
        let facilities = self.facilities.facilities()?;
        let report = analyze_capacity(start_date, end_date, &self.window, &facilities)?;

        tracing::info!(
            target: ANALYTICS_TARGET,
            StartDate = %report.start_date,
            EndDate = %report.end_date,
            Days = report.days,
            SlotsPerDay = report.slots_per_day,
            Facilities = report.facilities.len(),
            TotalCapacity = report.total_capacity,
            "Capacity analysed"
        );

        Ok(report)
    }

    /// Fetches the bookings of every facility in `report` for each day of its
    /// range and measures them against the report's capacity.
    pub fn utilization_report(&self, report: &CapacityReport) -> Result<UtilizationReport> {
        let range = report.range()?;
        let mut bookings: Vec<Booking> = Vec::new();

        for facility in &report.facilities {
            for date in range.iter() {
                let booked_times = self.bookings.booked_times(&facility.facility_id, date)?;
                bookings.extend(booked_times.into_iter().map(|time_of_day| Booking::new(facility.facility_id.clone(), date, time_of_day)));
            }
        }

        let utilization = analyze_utilization(report, &self.window, &bookings)?;

        tracing::info!(
            target: ANALYTICS_TARGET,
            StartDate = %report.start_date,
            EndDate = %report.end_date,
            PossibleCapacity = utilization.possible_capacity,
            Booked = utilization.booked,
            Overbooked = utilization.overbooked,
            Utilization = utilization.utilization,
            "Utilization analysed"
        );

        Ok(utilization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::facility::{Facilities, Facility};
    use crate::domain::snapshot::SchedulingSnapshot;
    use crate::error::Error;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn snapshot() -> SchedulingSnapshot {
        let mut facilities = Facilities::new();
        facilities.insert(Facility::new(FacilityId::new("up-01"), "Unit 1", 2).unwrap()).unwrap();
        facilities.insert(Facility::new(FacilityId::new("up-02"), "Unit 2", 1).unwrap()).unwrap();

        let unit_1 = FacilityId::new("up-01");
        let bookings = vec![
            Booking::new(unit_1.clone(), date(10), t(9, 0)),
            Booking::new(unit_1.clone(), date(10), t(9, 0)),
            Booking::new(unit_1.clone(), date(10), t(9, 15)),
            Booking::new(FacilityId::new("up-02"), date(10), t(9, 30)),
        ];

        let window = OperatingWindow::new(t(9, 0), t(10, 0), 15).unwrap();
        SchedulingSnapshot::new(window, facilities, bookings)
    }

    #[test]
    fn available_slots_use_fetched_bookings() {
        let snapshot = snapshot();
        let service = SchedulingService::new(&snapshot, &snapshot, snapshot.operating_window);

        let available = service.available_slots(&FacilityId::new("up-01"), date(10)).unwrap();

        assert_eq!(available, vec![t(9, 15), t(9, 30), t(9, 45)]);
    }

    #[test]
    fn other_dates_are_unaffected() {
        let snapshot = snapshot();
        let service = SchedulingService::new(&snapshot, &snapshot, snapshot.operating_window);

        let available = service.available_slots(&FacilityId::new("up-01"), date(11)).unwrap();

        assert_eq!(available.len(), 4);
    }

    #[test]
    fn unknown_facility_is_reported() {
        let snapshot = snapshot();
        let service = SchedulingService::new(&snapshot, &snapshot, snapshot.operating_window);

        let result = service.available_slots(&FacilityId::new("up-99"), date(10));

        assert!(matches!(result, Err(Error::UnknownFacility(id)) if id == "up-99"));
    }

    #[test]
    fn capacity_and_utilization_over_range() {
        let snapshot = snapshot();
        let service = SchedulingService::new(&snapshot, &snapshot, snapshot.operating_window);

        let report = service.capacity_report(date(10), date(11)).unwrap();
        assert_eq!(report.total_capacity, (2 + 1) * 4 * 2);

        let utilization = service.utilization_report(&report).unwrap();
        assert_eq!(utilization.booked, 4);
        assert_eq!(utilization.overbooked, 0);
        assert_eq!(utilization.free, 24 - 4);
    }
}
