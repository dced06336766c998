use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, NaiveTime};

use crate::domain::booking::Booking;
use crate::domain::schedule::slot_grid::SlotGrid;
use crate::domain::utils::id::FacilityId;

/// Number of bookings per slot start time for a single facility and date.
///
/// Times without an entry count as zero occupancy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occupancy {
    counts: BTreeMap<NaiveTime, i64>,
}

impl Occupancy {
    pub fn new() -> Self {
        Occupancy { counts: BTreeMap::new() }
    }

    /// Tallies the bookings of `facility_id` on `date`, ignoring every other tuple.
    pub fn tally<'a>(bookings: impl IntoIterator<Item = &'a Booking>, facility_id: &FacilityId, date: NaiveDate) -> Self {
        bookings
            .into_iter()
            .filter(|booking| &booking.facility_id == facility_id && booking.date == date)
            .map(|booking| booking.time_of_day)
            .collect()
    }

    pub fn record(&mut self, time_of_day: NaiveTime) {
        *self.counts.entry(time_of_day).or_insert(0) += 1;
    }

    pub fn get(&self, time_of_day: NaiveTime) -> i64 {
        self.counts.get(&time_of_day).copied().unwrap_or(0)
    }

    pub fn total(&self) -> i64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Booked times that do not start a slot of `grid`. Those bookings never
    /// reduce the availability of any slot.
    pub fn off_grid_times(&self, grid: &SlotGrid) -> Vec<NaiveTime> {
        self.counts.keys().copied().filter(|time| !grid.contains(*time)).collect()
    }

    /// Bookings that start a slot of `grid`.
    pub fn on_grid_total(&self, grid: &SlotGrid) -> i64 {
        self.counts.iter().filter(|(time, _)| grid.contains(**time)).map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveTime, i64)> + '_ {
        self.counts.iter().map(|(time, count)| (*time, *count))
    }
}

impl FromIterator<NaiveTime> for Occupancy {
    fn from_iter<I: IntoIterator<Item = NaiveTime>>(iter: I) -> Self {
        let mut occupancy = Occupancy::new();
        for time_of_day in iter {
            occupancy.record(time_of_day);
        }
        occupancy
    }
}

impl From<BTreeMap<NaiveTime, i64>> for Occupancy {
    fn from(counts: BTreeMap<NaiveTime, i64>) -> Self {
        Occupancy { counts }
    }
}

impl From<HashMap<NaiveTime, i64>> for Occupancy {
    fn from(counts: HashMap<NaiveTime, i64>) -> Self {
        Occupancy { counts: counts.into_iter().collect() }
    }
}
