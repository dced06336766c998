use serde::Serialize;

use crate::api::operating_window_dto::OperatingWindowDto;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotStatusDto {
    pub time_of_day: String,
    pub load: i64,
    pub capacity: i64,
    pub free_capacity: i64,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityDto {
    pub facility_id: String,
    pub date: String,
    pub room_count: i64,
    pub operating_window: OperatingWindowDto,
    pub available_slots: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<SlotStatusDto>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityCapacityDto {
    pub facility_id: String,
    pub room_count: i64,
    pub capacity: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityReportDto {
    pub start_date: String,
    pub end_date: String,
    pub days: i64,
    pub slots_per_day: i64,
    pub total_capacity: i64,
    pub facilities: Vec<FacilityCapacityDto>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationReportDto {
    pub possible_capacity: i64,
    pub booked: i64,
    pub free: i64,
    pub overbooked: i64,
    pub utilization: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityAnalysisDto {
    pub operating_window: OperatingWindowDto,
    pub capacity: CapacityReportDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization: Option<UtilizationReportDto>,
}
