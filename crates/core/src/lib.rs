//! # OpenHours Core
//!
//! Domain types shared by the store and the API: locations and their weekly
//! time slots, the availability projection, and the error type every layer
//! maps into.
//!
//! The [`availability`] module holds the filter that decides which locations
//! are open for a whole target window on a given weekday.

pub mod availability;
pub mod errors;
pub mod models;
