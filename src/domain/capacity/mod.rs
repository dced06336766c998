pub mod capacity_report;
pub mod date_range;
pub mod utilization;
