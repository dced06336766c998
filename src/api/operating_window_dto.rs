use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OperatingWindowDto {
    pub start_time: String,
    pub end_time: String,
    pub interval_minutes: i64,
}
