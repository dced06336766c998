pub mod availability;
pub mod occupancy;
pub mod operating_window;
pub mod slot;
pub mod slot_grid;
