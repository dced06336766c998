use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use hearing_slot_scheduler::api::report_dto::{AvailabilityDto, CapacityAnalysisDto, SlotStatusDto};
use hearing_slot_scheduler::domain::scheduling_service::SchedulingService;
use hearing_slot_scheduler::domain::utils::id::FacilityId;
use hearing_slot_scheduler::domain::utils::normalize::{format_date, format_time_of_day, parse_date};
use hearing_slot_scheduler::domain::utils::statistics::{write_capacity_report_file, write_slot_statuses_file};
use hearing_slot_scheduler::{generate_scheduling_snapshot, logger};

/// Slot availability and capacity reports for custody hearing facilities.
#[derive(Debug, Parser)]
#[command(name = "hearing-slots", version)]
struct Cli {
    /// JSON snapshot with facilities, bookings and an optional operating window.
    #[arg(long)]
    snapshot: PathBuf,

    /// Overrides the slot width of the snapshot's operating window, in minutes.
    #[arg(long)]
    interval: Option<i64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Lists the free slots of one facility on one day.
    Available {
        #[arg(long)]
        facility: String,

        /// Day in YYYY-MM-DD format.
        #[arg(long)]
        date: String,

        /// Also print the load of every slot.
        #[arg(long)]
        status: bool,

        /// Writes the per-slot load as CSV to this file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Theoretical capacity of all facilities between two days, both inclusive.
    Capacity {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        /// Also measure the booked load against the capacity.
        #[arg(long)]
        utilization: bool,

        /// Writes the per-facility capacity as CSV to this file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn main() {
    logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let snapshot = generate_scheduling_snapshot(&cli.snapshot).with_context(|| format!("could not load snapshot '{}'", cli.snapshot.display()))?;

    let window = match cli.interval {
        Some(interval) => snapshot.operating_window.with_interval(interval)?,
        None => snapshot.operating_window,
    };

    let service = SchedulingService::new(&snapshot, &snapshot, window);

    let output = match cli.command {
        Command::Available { facility, date, status, csv } => {
            let facility_id = FacilityId::new(facility);
            let date = parse_date(&date)?;

            let statuses = service.slot_statuses(&facility_id, date)?;
            let available_slots = service.available_slots(&facility_id, date)?;

            if let Some(path) = csv {
                write_slot_statuses_file(&path, &facility_id, date, &statuses)?;
            }

            let slots = status.then(|| {
                statuses
                    .iter()
                    .map(|status| SlotStatusDto {
                        time_of_day: format_time_of_day(status.time_of_day),
                        load: status.load,
                        capacity: status.capacity,
                        free_capacity: status.free_capacity(),
                        available: status.is_available(),
                    })
                    .collect()
            });

            let dto = AvailabilityDto {
                facility_id: facility_id.to_string(),
                date: format_date(date),
                room_count: service.room_count(&facility_id)?,
                operating_window: window.to_dto(),
                available_slots: available_slots.into_iter().map(format_time_of_day).collect(),
                slots,
            };

            serde_json::to_string_pretty(&dto)?
        }
        Command::Capacity { from, to, utilization, csv } => {
            let report = service.capacity_report(parse_date(&from)?, parse_date(&to)?)?;

            if let Some(path) = csv {
                write_capacity_report_file(&path, &report)?;
            }

            let utilization = match utilization {
                true => Some(service.utilization_report(&report)?.to_dto()),
                false => None,
            };

            let dto = CapacityAnalysisDto { operating_window: window.to_dto(), capacity: report.to_dto(), utilization };

            serde_json::to_string_pretty(&dto)?
        }
    };

    println!("{}", output);
    Ok(())
}
