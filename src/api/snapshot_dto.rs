use serde::{Deserialize, Serialize};

use crate::api::booking_dto::BookingDto;
use crate::api::facility_dto::FacilityDto;
use crate::api::operating_window_dto::OperatingWindowDto;

/// Root of a scheduling snapshot file: the facility list and the bookings the
/// external stores returned, plus an optional operating window.
#[derive(Debug, Deserialize, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingSnapshotDto {
    pub operating_window: Option<OperatingWindowDto>,
    pub facilities: Vec<FacilityDto>,
    #[serde(default)]
    pub bookings: Vec<BookingDto>,
}
