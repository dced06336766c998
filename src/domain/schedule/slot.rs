use chrono::NaiveTime;

/// Occupancy of one slot of one facility on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotStatus {
    /// Start time of the slot.
    pub time_of_day: NaiveTime,

    /// Number of hearings already booked in this slot.
    pub load: i64,

    /// Number of hearings the facility can host at once (`room_count`).
    pub capacity: i64,
}

impl SlotStatus {
    pub fn new(time_of_day: NaiveTime, load: i64, capacity: i64) -> Self {
        SlotStatus { time_of_day, load, capacity }
    }

    /// Rooms still free in this slot. An overbooked slot reports `0`, never a
    /// negative number; use [`SlotStatus::is_overbooked`] to detect that case.
    pub fn free_capacity(&self) -> i64 {
        (self.capacity - self.load).max(0)
    }

    pub fn is_available(&self) -> bool {
        self.load < self.capacity
    }

    pub fn is_overbooked(&self) -> bool {
        self.load > self.capacity
    }
}
