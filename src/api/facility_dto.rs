use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityDto {
    pub id: String,
    pub name: String,
    pub room_count: i64,
}
