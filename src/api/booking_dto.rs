use serde::{Deserialize, Serialize};

/// Read-only projection of a booked hearing.
#[derive(Debug, Deserialize, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub hearing_id: Option<String>,
    pub facility_id: String,
    pub date: String,
    pub time_of_day: String,
}
