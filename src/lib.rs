use std::path::Path;

use crate::api::snapshot_dto::SchedulingSnapshotDto;
use crate::domain::snapshot::SchedulingSnapshot;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

pub use crate::domain::capacity::capacity_report::{CapacityReport, analyze_capacity};
pub use crate::domain::schedule::availability::{available_slots, slot_statuses};
pub use crate::domain::schedule::slot_grid::{SlotGrid, generate_grid};

/// Loads a scheduling snapshot (facilities, bookings, operating window) from a JSON file.
pub fn generate_scheduling_snapshot(file_path: impl AsRef<Path>) -> Result<SchedulingSnapshot> {
    let file_path = file_path.as_ref();
    log::info!("Loading scheduling snapshot from '{}'.", file_path.display());

    let root_dto: SchedulingSnapshotDto = parse_json_file(file_path)?;
    log::debug!("JSON file parsed successfully.");

    SchedulingSnapshot::from_dto(root_dto)
}
