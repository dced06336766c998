//! Read interfaces of the external stores the engine consumes.
//!
//! Implementations own fetching, caching and consistency. The engine only ever
//! sees the snapshot a provider hands back for one call.

use chrono::{NaiveDate, NaiveTime};

use crate::domain::facility::Facility;
use crate::domain::utils::id::FacilityId;
use crate::error::Result;

pub trait FacilityProvider: Send + Sync {
    /// Concurrent hearing capacity of one facility.
    /// Fails with `UnknownFacility` if the id is not known.
    fn room_count(&self, facility_id: &FacilityId) -> Result<i64>;

    /// All facilities taking part in range analysis.
    fn facilities(&self) -> Result<Vec<Facility>>;
}

pub trait BookingSnapshotProvider: Send + Sync {
    /// Slot start times already booked for `facility_id` on `date`, one entry
    /// per hearing. The same time appears once for every hearing booked into it.
    fn booked_times(&self, facility_id: &FacilityId, date: NaiveDate) -> Result<Vec<NaiveTime>>;
}
