use chrono::NaiveTime;

use crate::domain::schedule::occupancy::Occupancy;
use crate::domain::schedule::slot::SlotStatus;
use crate::error::{Error, Result};

/// Pairs every slot of `grid` with its booked load and the facility capacity.
///
/// Slots keep the order of the input grid. Fails with `InvalidCapacity` when
/// `room_count <= 0`, before any slot is looked at.
pub fn slot_statuses<G>(grid: G, occupancy: &Occupancy, room_count: i64) -> Result<Vec<SlotStatus>>
where
    G: IntoIterator<Item = NaiveTime>,
{
    if room_count <= 0 {
        return Err(Error::InvalidCapacity(room_count));
    }

    let statuses = grid.into_iter().map(|time_of_day| SlotStatus::new(time_of_day, occupancy.get(time_of_day), room_count)).collect();

    Ok(statuses)
}

/// Returns the slots of `grid` that still have at least one free room.
///
/// A slot is available iff its occupancy is strictly below `room_count`; slots
/// missing from `occupancy` are free. Only the number of hearings per slot
/// matters, not which room they use. The result is a snapshot: nothing is
/// reserved, and two callers can both see the same slot as available.
pub fn available_slots<G>(grid: G, occupancy: &Occupancy, room_count: i64) -> Result<Vec<NaiveTime>>
where
    G: IntoIterator<Item = NaiveTime>,
{
    let available = slot_statuses(grid, occupancy, room_count)?
        .into_iter()
        .filter(SlotStatus::is_available)
        .map(|status| status.time_of_day)
        .collect();

    Ok(available)
}
