use chrono::{NaiveDate, NaiveTime};

use hearing_slot_scheduler::domain::booking::Booking;
use hearing_slot_scheduler::domain::schedule::occupancy::Occupancy;
use hearing_slot_scheduler::domain::utils::id::FacilityId;
use hearing_slot_scheduler::error::Error;
use hearing_slot_scheduler::{available_slots, generate_grid, slot_statuses};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_end_to_end_two_rooms_one_full_slot() {
    let facility_id = FacilityId::new("up-01");
    let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let room_count = 2;

    let bookings = vec![
        Booking::new(facility_id.clone(), date, t(9, 0)),
        Booking::new(facility_id.clone(), date, t(9, 0)),
        Booking::new(facility_id.clone(), date, t(9, 15)),
    ];

    let grid = generate_grid(t(9, 0), t(10, 0), 15).unwrap();
    assert_eq!(grid.iter().collect::<Vec<_>>(), vec![t(9, 0), t(9, 15), t(9, 30), t(9, 45)]);

    let occupancy = Occupancy::tally(&bookings, &facility_id, date);
    let available = available_slots(grid, &occupancy, room_count).unwrap();

    assert_eq!(available, vec![t(9, 15), t(9, 30), t(9, 45)]);
}

#[test]
fn test_grid_boundaries_for_observed_intervals() {
    let quarter_hours = generate_grid(t(9, 0), t(18, 0), 15).unwrap();
    assert_eq!(quarter_hours.len(), 36);
    assert_eq!(quarter_hours.first(), Some(t(9, 0)));
    assert_eq!(quarter_hours.last(), Some(t(17, 45)));

    let half_hours = generate_grid(t(9, 0), t(18, 0), 30).unwrap();
    assert_eq!(half_hours.len(), 18);
    assert_eq!(half_hours.last(), Some(t(17, 30)));
}

#[test]
fn test_partial_interval_is_dropped() {
    let grid = generate_grid(t(9, 0), t(9, 50), 15).unwrap();

    assert_eq!(grid.iter().collect::<Vec<_>>(), vec![t(9, 0), t(9, 15), t(9, 30)]);
}

#[test]
fn test_available_slots_accepts_plain_occupancy_map() {
    let grid = generate_grid(t(9, 0), t(9, 45), 15).unwrap();

    let mut counts = std::collections::HashMap::new();
    counts.insert(t(9, 30), 1);
    let occupancy = Occupancy::from(counts);

    let available = available_slots(grid, &occupancy, 1).unwrap();

    assert_eq!(available, vec![t(9, 0), t(9, 15)]);
}

#[test]
fn test_slot_statuses_report_free_rooms() {
    let grid = generate_grid(t(9, 0), t(9, 30), 15).unwrap();
    let occupancy: Occupancy = vec![t(9, 0)].into_iter().collect();

    let statuses = slot_statuses(grid, &occupancy, 3).unwrap();

    assert_eq!(statuses[0].free_capacity(), 2);
    assert_eq!(statuses[1].free_capacity(), 3);
}

#[test]
fn test_invalid_inputs_fail_immediately() {
    assert!(matches!(generate_grid(t(9, 0), t(18, 0), 0), Err(Error::InvalidWindow(_))));
    assert!(matches!(generate_grid(t(18, 0), t(9, 0), 15), Err(Error::InvalidWindow(_))));

    let grid = generate_grid(t(9, 0), t(18, 0), 15).unwrap();
    assert!(matches!(available_slots(grid, &Occupancy::new(), 0), Err(Error::InvalidCapacity(0))));
}
