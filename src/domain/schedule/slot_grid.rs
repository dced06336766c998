use std::iter::FusedIterator;

use chrono::{NaiveTime, TimeDelta};

use crate::error::{Error, Result};

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// The ordered, fixed-width slot start times of one operating day.
///
/// A grid is a small `Copy` value; iterating it computes each slot on the fly,
/// so it can be walked any number of times and never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGrid {
    start_time: NaiveTime,
    interval: TimeDelta,
    slot_count: usize,
}

/// Builds the slot grid for `[start_time, end_time)` with slots of `interval_minutes`.
///
/// A slot is part of the grid only if it fits completely into the window, i.e.
/// `slot + interval <= end_time`. A trailing remainder shorter than one interval
/// is dropped: 09:00 to 09:50 in 15 minute steps yields 09:00, 09:15 and 09:30.
///
/// Fails with `InvalidWindow` if `interval_minutes <= 0`, if the interval is
/// longer than a day, or if `start_time >= end_time`.
pub fn generate_grid(start_time: NaiveTime, end_time: NaiveTime, interval_minutes: i64) -> Result<SlotGrid> {
    if interval_minutes <= 0 {
        return Err(Error::InvalidWindow(format!("slot interval must be positive, got {} minutes", interval_minutes)));
    }

    if interval_minutes > MINUTES_PER_DAY {
        return Err(Error::InvalidWindow(format!("slot interval of {} minutes exceeds one day", interval_minutes)));
    }

    if start_time >= end_time {
        return Err(Error::InvalidWindow(format!("start time {} must be before end time {}", start_time, end_time)));
    }

    let interval = TimeDelta::minutes(interval_minutes);
    let window_seconds = (end_time - start_time).num_seconds();
    let slot_count = (window_seconds / interval.num_seconds()) as usize;

    if window_seconds % interval.num_seconds() != 0 {
        log::debug!(
            "Window {}-{} is not a multiple of {} minutes, trailing partial slot is dropped.",
            start_time,
            end_time,
            interval_minutes
        );
    }

    Ok(SlotGrid { start_time, interval, slot_count })
}

impl SlotGrid {
    pub fn len(&self) -> usize {
        self.slot_count
    }

    pub fn is_empty(&self) -> bool {
        self.slot_count == 0
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn interval(&self) -> TimeDelta {
        self.interval
    }

    /// Start time of the slot at `index`, or `None` past the end of the grid.
    pub fn slot_at(&self, index: usize) -> Option<NaiveTime> {
        if index >= self.slot_count {
            return None;
        }

        // index < slot_count <= MINUTES_PER_DAY, the multiplication cannot overflow
        // and the result stays before the window end.
        Some(self.start_time + self.interval * index as i32)
    }

    pub fn first(&self) -> Option<NaiveTime> {
        self.slot_at(0)
    }

    pub fn last(&self) -> Option<NaiveTime> {
        self.slot_count.checked_sub(1).and_then(|index| self.slot_at(index))
    }

    /// Index of the slot starting exactly at `time`, if `time` is on the grid.
    pub fn index_of(&self, time: NaiveTime) -> Option<usize> {
        if time < self.start_time {
            return None;
        }

        let offset = (time - self.start_time).num_seconds();
        let step = self.interval.num_seconds();

        if offset % step != 0 {
            return None;
        }

        let index = (offset / step) as usize;
        (index < self.slot_count).then_some(index)
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.index_of(time).is_some()
    }

    pub fn iter(&self) -> SlotIter {
        SlotIter { grid: *self, front: 0, back: self.slot_count }
    }
}

#[derive(Debug, Clone)]
pub struct SlotIter {
    grid: SlotGrid,
    front: usize,
    back: usize,
}

impl Iterator for SlotIter {
    type Item = NaiveTime;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let slot = self.grid.slot_at(self.front);
        self.front += 1;
        slot
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for SlotIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        self.grid.slot_at(self.back)
    }
}

impl ExactSizeIterator for SlotIter {}

impl FusedIterator for SlotIter {}

impl IntoIterator for SlotGrid {
    type Item = NaiveTime;
    type IntoIter = SlotIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &SlotGrid {
    type Item = NaiveTime;
    type IntoIter = SlotIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
