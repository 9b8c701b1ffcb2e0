//! Bulk import of locations from a CSV file.
//!
//! The file has one row per location and weekday:
//!
//! ```text
//! Id,Name,Type,Address,DayOfWeek,OpenTime,CloseTime
//! 1,Corner Shop,Shop,1 High St,Monday,08:00,20:00
//! 1,Corner Shop,Shop,1 High St,Tuesday,08:00,20:00
//! ```
//!
//! Rows sharing an `Id` become one location. The CSV id only groups rows;
//! the store hands out fresh ids on append.

use std::{collections::HashMap, io::Read, path::Path};

use chrono::NaiveTime;
use eyre::{Result, WrapErr};
use openhours_core::models::{
    day::DayOfWeek,
    location::{Location, NewLocation, TimeSlot},
};
use serde::Deserialize;
use tokio::fs;
use tracing::{error, info, warn};

use crate::LocationStore;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocationCsvRecord {
    pub id: i64,
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub address: String,
    pub day_of_week: String,
    pub open_time: String,
    pub close_time: String,
}

/// Parses CSV rows and groups them into locations, keeping the order in which
/// each id first appears. Name, type and address come from the first row of
/// each group.
pub fn read_locations<R: Read>(reader: R) -> Result<Vec<NewLocation>> {
    let mut csv = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut locations: Vec<NewLocation> = Vec::new();
    let mut positions: HashMap<i64, usize> = HashMap::new();

    for (row, record) in csv.deserialize::<LocationCsvRecord>().enumerate() {
        let record = record.wrap_err_with(|| format!("invalid CSV record at row {}", row + 1))?;
        let slot = TimeSlot::new(
            parse_day(&record.day_of_week),
            parse_time(&record.open_time),
            parse_time(&record.close_time),
        );

        match positions.get(&record.id) {
            Some(&index) => locations[index].available_time_slots.push(slot),
            None => {
                positions.insert(record.id, locations.len());
                locations.push(NewLocation {
                    name: record.name,
                    kind: record.kind,
                    address: record.address,
                    available_time_slots: vec![slot],
                });
            }
        }
    }

    Ok(locations)
}

/// Reads and groups the CSV at `path`. A missing file is logged and yields no
/// locations.
pub async fn import_locations_from_csv(path: &Path) -> Result<Vec<NewLocation>> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            error!(path = %path.display(), "CSV file not found");
            return Ok(Vec::new());
        }
        Err(err) => {
            return Err(err).wrap_err_with(|| format!("failed to read {}", path.display()));
        }
    };

    let locations = read_locations(bytes.as_slice())
        .wrap_err_with(|| format!("Error importing locations from CSV file: {}", path.display()))?;

    if locations.is_empty() {
        warn!(path = %path.display(), "No records found in CSV file");
    } else {
        info!(count = locations.len(), "Parsed locations from CSV");
    }

    Ok(locations)
}

/// Imports the CSV at `path` into `store`, returning the stored locations
/// with their newly assigned ids.
pub async fn import_into_store(store: &dyn LocationStore, path: &Path) -> Result<Vec<Location>> {
    let locations = import_locations_from_csv(path).await?;
    if locations.is_empty() {
        return Ok(Vec::new());
    }

    let added = store.append_many(locations).await?;
    info!(count = added.len(), "Successfully imported locations from CSV");
    Ok(added)
}

/// Accepts a weekday name in any case or a Sunday-based index. Anything else
/// falls back to Monday.
fn parse_day(value: &str) -> DayOfWeek {
    value
        .parse()
        .ok()
        .or_else(|| value.parse::<u64>().ok().and_then(DayOfWeek::from_index))
        .unwrap_or_else(|| {
            warn!(value, "Unrecognised day of week in CSV, defaulting to Monday");
            DayOfWeek::Monday
        })
}

/// Accepts `HH:MM:SS` or `HH:MM`. Anything else falls back to midnight.
fn parse_time(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .unwrap_or_else(|_| {
            warn!(value, "Unrecognised time in CSV, defaulting to 00:00");
            NaiveTime::MIN
        })
}
