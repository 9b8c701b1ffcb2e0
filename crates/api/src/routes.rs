pub mod health;
pub mod import;
pub mod locations;
pub mod search;
