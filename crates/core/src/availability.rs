//! # Availability Engine
//!
//! Decides which locations are open for an entire target window on one
//! weekday.
//!
//! ## Algorithm
//!
//! 1. For each location, take the first time slot on the requested day.
//!    A location with no slot that day reports `00:00:00`–`00:00:00` and is
//!    unavailable.
//! 2. The location is available when the slot contains the window:
//!    `open <= window.start && close >= window.end`. Touching either edge
//!    counts; partial overlap does not.
//! 3. Every input location yields exactly one [`AvailabilityResult`], in
//!    input order.
//!
//! [`summarize`] then keeps the available results and attaches the count and
//! a human readable message.
//!
//! A slot whose close time is earlier than its open time (open past midnight)
//! is compared as plain clock times, so it only qualifies when both bounds
//! independently satisfy the containment test.
//!
//! The engine does no I/O and reads no clock. The caller resolves "today"
//! before calling in.

use std::fmt;

use chrono::{Duration, NaiveTime, Timelike};

use crate::{
    errors::{LocationError, LocationResult},
    models::{
        availability::{AvailabilityResponse, AvailabilityResult},
        day::DayOfWeek,
        location::Location,
    },
};

/// The clock interval a location has to cover to count as available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl AvailabilityWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> LocationResult<Self> {
        if start > end {
            return Err(LocationError::Validation(format!(
                "window start {start} is after window end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// 10:00 to 13:00.
    pub fn late_morning() -> Self {
        Self {
            start: NaiveTime::MIN + Duration::hours(10),
            end: NaiveTime::MIN + Duration::hours(13),
        }
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn is_covered_by(&self, open: NaiveTime, close: NaiveTime) -> bool {
        open <= self.start && close >= self.end
    }
}

impl Default for AvailabilityWindow {
    fn default() -> Self {
        Self::late_morning()
    }
}

/// Renders as `10 AM and 1 PM`, the phrasing used in response messages.
impl fmt::Display for AvailabilityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} and {}",
            ClockLabel(self.start),
            ClockLabel(self.end)
        )
    }
}

struct ClockLabel(NaiveTime);

impl fmt::Display for ClockLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (is_pm, hour) = self.0.hour12();
        let meridiem = if is_pm { "PM" } else { "AM" };
        match self.0.minute() {
            0 => write!(f, "{hour} {meridiem}"),
            minute => write!(f, "{hour}:{minute:02} {meridiem}"),
        }
    }
}

/// Projects every location onto `day` and flags the ones whose hours cover
/// `window`.
pub fn compute_availability(
    locations: &[Location],
    day: DayOfWeek,
    window: &AvailabilityWindow,
) -> Vec<AvailabilityResult> {
    locations
        .iter()
        .map(|location| {
            let (open_time, close_time, is_available) = match location.slot_for(day) {
                Some(slot) => (
                    slot.open_time,
                    slot.close_time,
                    window.is_covered_by(slot.open_time, slot.close_time),
                ),
                None => (NaiveTime::MIN, NaiveTime::MIN, false),
            };

            AvailabilityResult {
                id: location.id,
                name: location.name.clone(),
                kind: location.kind.clone(),
                address: location.address.clone(),
                open_time,
                close_time,
                is_available,
            }
        })
        .collect()
}

/// Keeps the available results and builds the response message.
pub fn summarize(
    results: Vec<AvailabilityResult>,
    day: DayOfWeek,
    window: &AvailabilityWindow,
) -> AvailabilityResponse {
    let locations: Vec<_> = results
        .into_iter()
        .filter(|result| result.is_available)
        .collect();
    let total_count = locations.len();

    let message = if total_count > 0 {
        format!("Found {total_count} locations available between {window} on {day}")
    } else {
        format!("No locations available between {window} on {day}")
    };

    AvailabilityResponse {
        locations,
        total_count,
        message,
    }
}

/// [`compute_availability`] followed by [`summarize`].
pub fn available_locations(
    locations: &[Location],
    day: DayOfWeek,
    window: &AvailabilityWindow,
) -> AvailabilityResponse {
    summarize(compute_availability(locations, day, window), day, window)
}
