use chrono::{NaiveDate, NaiveTime};

use crate::api::snapshot_dto::SchedulingSnapshotDto;
use crate::domain::booking::Booking;
use crate::domain::facility::{Facilities, Facility};
use crate::domain::providers::{BookingSnapshotProvider, FacilityProvider};
use crate::domain::schedule::operating_window::OperatingWindow;
use crate::domain::utils::id::FacilityId;
use crate::error::{Error, Result};

/// In-memory copy of the facility list and booked hearings, typically loaded
/// from a snapshot file. Serves as both provider the engine needs.
#[derive(Debug, Clone, Default)]
pub struct SchedulingSnapshot {
    pub operating_window: OperatingWindow,
    pub facilities: Facilities,
    pub bookings: Vec<Booking>,
}

impl SchedulingSnapshot {
    pub fn new(operating_window: OperatingWindow, facilities: Facilities, bookings: Vec<Booking>) -> Self {
        SchedulingSnapshot { operating_window, facilities, bookings }
    }

    pub fn from_dto(dto: SchedulingSnapshotDto) -> Result<Self> {
        let operating_window = match &dto.operating_window {
            Some(window_dto) => OperatingWindow::from_dto(window_dto)?,
            None => {
                log::info!("Snapshot defines no operating window, using the default of 09:00-18:00 in 15 minute slots.");
                OperatingWindow::default()
            }
        };

        let facilities = Facilities::from_dto(dto.facilities)?;

        let bookings = dto.bookings.into_iter().map(Booking::from_dto).collect::<Result<Vec<Booking>>>()?;

        for booking in bookings.iter().filter(|booking| facilities.get(&booking.facility_id).is_none()) {
            log::warn!(
                "Booking {:?} on {} at {} refers to unknown facility '{}' and will never be counted.",
                booking.hearing_id,
                booking.date,
                booking.time_of_day,
                booking.facility_id
            );
        }

        log::info!("Snapshot loaded: {} facilities, {} bookings.", facilities.len(), bookings.len());

        Ok(SchedulingSnapshot { operating_window, facilities, bookings })
    }
}

impl FacilityProvider for SchedulingSnapshot {
    fn room_count(&self, facility_id: &FacilityId) -> Result<i64> {
        self.facilities.get(facility_id).map(Facility::room_count).ok_or_else(|| Error::UnknownFacility(facility_id.to_string()))
    }

    fn facilities(&self) -> Result<Vec<Facility>> {
        Ok(self.facilities.to_vec())
    }
}

impl BookingSnapshotProvider for SchedulingSnapshot {
    fn booked_times(&self, facility_id: &FacilityId, date: NaiveDate) -> Result<Vec<NaiveTime>> {
        let times = self
            .bookings
            .iter()
            .filter(|booking| &booking.facility_id == facility_id && booking.date == date)
            .map(|booking| booking.time_of_day)
            .collect();

        Ok(times)
    }
}
