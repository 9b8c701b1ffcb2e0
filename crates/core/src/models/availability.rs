use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A location projected onto a single day: its hours for that day and
/// whether they cover the whole target window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResult {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub address: String,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    #[serde(rename = "isAvailableBetween10And1")]
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub locations: Vec<AvailabilityResult>,
    pub total_count: usize,
    pub message: String,
}
