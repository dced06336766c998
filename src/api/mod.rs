pub mod booking_dto;
pub mod facility_dto;
pub mod operating_window_dto;
pub mod report_dto;
pub mod snapshot_dto;
