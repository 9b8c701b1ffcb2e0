use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::day::DayOfWeek;
use crate::errors::{LocationError, LocationResult};

/// Opening hours for one weekday. `close_time` earlier than `open_time`
/// denotes a span that runs past midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub day_of_week: DayOfWeek,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
}

impl TimeSlot {
    pub fn new(day_of_week: DayOfWeek, open_time: NaiveTime, close_time: NaiveTime) -> Self {
        Self {
            day_of_week,
            open_time,
            close_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub address: String,
    #[serde(default)]
    pub available_time_slots: Vec<TimeSlot>,
}

impl Location {
    pub fn from_new(id: u32, location: NewLocation) -> Self {
        Self {
            id,
            name: location.name,
            kind: location.kind,
            address: location.address,
            available_time_slots: location.available_time_slots,
        }
    }

    /// First slot on `day`. Later slots for the same day are ignored.
    pub fn slot_for(&self, day: DayOfWeek) -> Option<&TimeSlot> {
        self.available_time_slots
            .iter()
            .find(|slot| slot.day_of_week == day)
    }
}

/// A location that has not been given an id yet. Any `id` in an incoming
/// payload is dropped; the store assigns one on append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLocation {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub available_time_slots: Vec<TimeSlot>,
}

impl NewLocation {
    pub fn validate(&self) -> LocationResult<()> {
        if self.name.is_empty() {
            return Err(LocationError::Validation(
                "Location name is required".to_string(),
            ));
        }
        if self.available_time_slots.is_empty() {
            return Err(LocationError::Validation(
                "At least one time slot is required".to_string(),
            ));
        }
        Ok(())
    }
}
