//! Fixed catalog used when no data file exists yet.

use chrono::{Duration, NaiveTime};
use openhours_core::models::{
    day::DayOfWeek::{self, *},
    location::{Location, TimeSlot},
};

type Hours = (DayOfWeek, (i64, i64), (i64, i64));

fn hm((hour, minute): (i64, i64)) -> NaiveTime {
    NaiveTime::MIN + Duration::minutes(hour * 60 + minute)
}

fn location(id: u32, name: &str, kind: &str, address: &str, hours: &[Hours]) -> Location {
    Location {
        id,
        name: name.to_string(),
        kind: kind.to_string(),
        address: address.to_string(),
        available_time_slots: hours
            .iter()
            .map(|&(day, open, close)| TimeSlot::new(day, hm(open), hm(close)))
            .collect(),
    }
}

pub fn default_locations() -> Vec<Location> {
    vec![
        location(1, "City Pharmacy", "Pharmacy", "123 Main St", &[
            (Monday, (9, 0), (18, 0)),
            (Tuesday, (9, 0), (18, 0)),
            (Wednesday, (9, 0), (18, 0)),
            (Thursday, (9, 0), (18, 0)),
            (Friday, (9, 0), (18, 0)),
            (Saturday, (10, 0), (14, 0)),
        ]),
        location(2, "Fresh Bakery", "Bakery", "456 Oak Ave", &[
            (Monday, (6, 0), (18, 0)),
            (Tuesday, (6, 0), (18, 0)),
            (Wednesday, (6, 0), (18, 0)),
            (Thursday, (6, 0), (18, 0)),
            (Friday, (6, 0), (18, 0)),
            (Saturday, (7, 0), (14, 0)),
            (Sunday, (8, 0), (12, 0)),
        ]),
        location(3, "Style Cuts", "Barber Shop", "789 Elm St", &[
            (Monday, (11, 0), (20, 0)),
            (Tuesday, (11, 0), (20, 0)),
            (Wednesday, (11, 0), (20, 0)),
            (Thursday, (11, 0), (20, 0)),
            (Friday, (10, 0), (22, 0)),
            (Saturday, (10, 0), (22, 0)),
        ]),
        location(4, "Mega Mart", "Supermarket", "101 Broadway", &[
            (Monday, (8, 0), (22, 0)),
            (Tuesday, (8, 0), (22, 0)),
            (Wednesday, (8, 0), (22, 0)),
            (Thursday, (8, 0), (22, 0)),
            (Friday, (8, 0), (23, 0)),
            (Saturday, (8, 0), (23, 0)),
            (Sunday, (9, 0), (21, 0)),
        ]),
        location(5, "Sweet Tooth", "Candy Store", "202 Cherry Lane", &[
            (Monday, (12, 0), (20, 0)),
            (Tuesday, (12, 0), (20, 0)),
            (Wednesday, (12, 0), (20, 0)),
            (Thursday, (12, 0), (20, 0)),
            (Friday, (12, 0), (22, 0)),
            (Saturday, (10, 0), (22, 0)),
            (Sunday, (12, 0), (18, 0)),
        ]),
        // Friday and Saturday run past midnight.
        location(6, "Cinemax", "Cinema Complex", "303 Movie Blvd", &[
            (Monday, (12, 30), (23, 0)),
            (Tuesday, (12, 30), (23, 0)),
            (Wednesday, (12, 30), (23, 0)),
            (Thursday, (12, 30), (23, 0)),
            (Friday, (12, 0), (1, 0)),
            (Saturday, (11, 0), (1, 0)),
            (Sunday, (11, 0), (23, 0)),
        ]),
        location(7, "Downtown Library", "Library", "404 Book St", &[
            (Monday, (9, 0), (17, 0)),
            (Tuesday, (9, 0), (17, 0)),
            (Wednesday, (9, 0), (17, 0)),
            (Thursday, (9, 0), (17, 0)),
            (Friday, (9, 0), (17, 0)),
            (Saturday, (10, 0), (14, 0)),
        ]),
        location(8, "Central Park Cafe", "Cafe", "505 Park Ave", &[
            (Monday, (7, 0), (17, 0)),
            (Tuesday, (7, 0), (17, 0)),
            (Wednesday, (7, 0), (17, 0)),
            (Thursday, (7, 0), (17, 0)),
            (Friday, (7, 0), (17, 0)),
            (Saturday, (8, 0), (17, 0)),
            (Sunday, (9, 0), (15, 0)),
        ]),
        location(9, "Fitness First", "Gym", "606 Muscle Way", &[
            (Monday, (6, 0), (23, 0)),
            (Tuesday, (6, 0), (23, 0)),
            (Wednesday, (6, 0), (23, 0)),
            (Thursday, (6, 0), (23, 0)),
            (Friday, (6, 0), (23, 0)),
            (Saturday, (8, 0), (20, 0)),
            (Sunday, (8, 0), (20, 0)),
        ]),
        location(10, "Golden Spa", "Spa", "707 Relaxation Rd", &[
            (Monday, (10, 0), (19, 0)),
            (Tuesday, (10, 0), (19, 0)),
            (Wednesday, (10, 0), (19, 0)),
            (Thursday, (10, 0), (19, 0)),
            (Friday, (10, 0), (21, 0)),
            (Saturday, (9, 0), (21, 0)),
            (Sunday, (12, 0), (18, 0)),
        ]),
    ]
}
