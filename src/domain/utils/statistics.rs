//! CSV export of capacity and availability reports, `;` delimited.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;

use crate::domain::capacity::capacity_report::CapacityReport;
use crate::domain::schedule::slot::SlotStatus;
use crate::domain::utils::id::FacilityId;
use crate::domain::utils::normalize::{format_date, format_time_of_day};
use crate::error::Result;

const DELIMITER: u8 = b';';
const TOTAL_ROW_LABEL: &str = "TOTAL";

pub const CAPACITY_HEADERS: [&str; 7] = ["FacilityId", "RoomCount", "StartDate", "EndDate", "Days", "SlotsPerDay", "Capacity"];
pub const SLOT_STATUS_HEADERS: [&str; 6] = ["FacilityId", "Date", "TimeOfDay", "Load", "Capacity", "FreeCapacity"];

/// One row per facility followed by a `TOTAL` row with the summed capacity.
pub fn write_capacity_report<W: Write>(writer: W, report: &CapacityReport) -> Result<()> {
    let mut csv_wtr = csv::WriterBuilder::new().delimiter(DELIMITER).from_writer(writer);

    csv_wtr.write_record(CAPACITY_HEADERS)?;

    let start_date = format_date(report.start_date);
    let end_date = format_date(report.end_date);
    let days = report.days.to_string();
    let slots_per_day = report.slots_per_day.to_string();

    for facility in &report.facilities {
        csv_wtr.write_record([
            facility.facility_id.to_string(),
            facility.room_count.to_string(),
            start_date.clone(),
            end_date.clone(),
            days.clone(),
            slots_per_day.clone(),
            facility.capacity.to_string(),
        ])?;
    }

    let total_rooms: i64 = report.facilities.iter().map(|facility| facility.room_count).sum();
    csv_wtr.write_record([TOTAL_ROW_LABEL.to_string(), total_rooms.to_string(), start_date, end_date, days, slots_per_day, report.total_capacity.to_string()])?;

    csv_wtr.flush()?;
    Ok(())
}

pub fn write_slot_statuses<W: Write>(writer: W, facility_id: &FacilityId, date: NaiveDate, statuses: &[SlotStatus]) -> Result<()> {
    let mut csv_wtr = csv::WriterBuilder::new().delimiter(DELIMITER).from_writer(writer);

    csv_wtr.write_record(SLOT_STATUS_HEADERS)?;

    let date = format_date(date);

    for status in statuses {
        csv_wtr.write_record([
            facility_id.to_string(),
            date.clone(),
            format_time_of_day(status.time_of_day),
            status.load.to_string(),
            status.capacity.to_string(),
            status.free_capacity().to_string(),
        ])?;
    }

    csv_wtr.flush()?;
    Ok(())
}

pub fn write_capacity_report_file(path: impl AsRef<Path>, report: &CapacityReport) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;

    write_capacity_report(file, report)?;
    log::info!("Capacity report written to '{}'.", path.display());

    Ok(())
}

pub fn write_slot_statuses_file(path: impl AsRef<Path>, facility_id: &FacilityId, date: NaiveDate, statuses: &[SlotStatus]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;

    write_slot_statuses(file, facility_id, date, statuses)?;
    log::info!("Slot status report written to '{}'.", path.display());

    Ok(())
}
