pub mod booking;
pub mod capacity;
pub mod facility;
pub mod providers;
pub mod schedule;
pub mod scheduling_service;
pub mod snapshot;
pub mod utils;
