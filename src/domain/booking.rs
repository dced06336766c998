use chrono::{NaiveDate, NaiveTime};

use crate::api::booking_dto::BookingDto;
use crate::domain::utils::id::{FacilityId, HearingId};
use crate::domain::utils::normalize::{parse_date, parse_time_of_day};
use crate::error::Result;

/// A booked hearing as seen by the scheduling engine: where, on which day and
/// at which slot start time. Several bookings may share the same tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub hearing_id: Option<HearingId>,
    pub facility_id: FacilityId,
    pub date: NaiveDate,
    pub time_of_day: NaiveTime,
}

impl Booking {
    pub fn new(facility_id: FacilityId, date: NaiveDate, time_of_day: NaiveTime) -> Self {
        Booking { hearing_id: None, facility_id, date, time_of_day }
    }

    pub fn with_hearing_id(mut self, hearing_id: HearingId) -> Self {
        self.hearing_id = Some(hearing_id);
        self
    }

    pub fn from_dto(dto: BookingDto) -> Result<Self> {
        let date = parse_date(&dto.date)?;
        let time_of_day = parse_time_of_day(&dto.time_of_day)?;

        Ok(Booking { hearing_id: dto.hearing_id.map(HearingId::new), facility_id: FacilityId::new(dto.facility_id), date, time_of_day })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn dto(date: &str, time_of_day: &str) -> BookingDto {
        BookingDto { hearing_id: Some("h-1".to_string()), facility_id: "up-01".to_string(), date: date.to_string(), time_of_day: time_of_day.to_string() }
    }

    #[test]
    fn converts_normalized_dto() {
        let booking = Booking::from_dto(dto("2024-03-10", "09:15")).unwrap();

        assert_eq!(booking.hearing_id, Some(HearingId::new("h-1")));
        assert_eq!(booking.date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(booking.time_of_day, NaiveTime::from_hms_opt(9, 15, 0).unwrap());
    }

    #[test]
    fn locale_formatted_date_is_rejected() {
        assert!(matches!(Booking::from_dto(dto("10/03/2024", "09:15")), Err(Error::InvalidInput(_))));
    }
}
