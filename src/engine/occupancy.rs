//! Converts schedule entries into platform-occupancy intervals.

use crate::config::EngineConfig;
use crate::delay::DelayPredictor;
use crate::models::{OccupiedInterval, Priority, ScheduleEntry};
use crate::time::anchor_to_date;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Passenger loads synthesized for entries without a recorded count
const SYNTH_PASSENGERS_MIN: u32 = 500;
const SYNTH_PASSENGERS_MAX: u32 = 1200;

/// Build one occupancy interval per entry with both arrival and departure
///
/// Clock times are anchored to `now`'s UTC calendar date; a departure earlier
/// than its arrival rolls forward one day (overnight dwell). Entries missing
/// either time are skipped without error.
pub fn build_occupancies<'a, I, R>(
    entries: I,
    now: DateTime<Utc>,
    config: &EngineConfig,
    delays: &dyn DelayPredictor,
    rng: &mut R,
) -> Vec<OccupiedInterval>
where
    I: IntoIterator<Item = &'a ScheduleEntry>,
    R: Rng + ?Sized,
{
    let today = now.date_naive();

    entries
        .into_iter()
        .filter_map(|entry| {
            let (Some(arrival), Some(departure)) = (entry.arrival_time, entry.departure_time)
            else {
                log::debug!(
                    "skipping {}: missing arrival or departure time",
                    entry.train_number
                );
                return None;
            };

            let scheduled_arrival = anchor_to_date(today, arrival);
            let mut scheduled_departure = anchor_to_date(today, departure);
            if scheduled_departure < scheduled_arrival {
                scheduled_departure += Duration::days(1);
            }

            let halt = scheduled_departure - scheduled_arrival;
            let dwell = halt.max(config.minimum_dwell);

            let passenger_count = entry
                .passenger_count
                .unwrap_or_else(|| rng.random_range(SYNTH_PASSENGERS_MIN..=SYNTH_PASSENGERS_MAX));

            Some(OccupiedInterval {
                train_number: entry.train_number.clone(),
                train_name: entry.train_name.clone(),
                station_code: entry.station_code.clone(),
                platform: entry.platform.clone(),
                train_type: entry.train_type,
                priority: Priority::from(entry.train_type),
                passenger_count,
                predicted_delay_minutes: delays.predict_delay_minutes(&entry.train_number),
                scheduled_arrival,
                scheduled_departure,
                occupancy_start: scheduled_arrival - config.arrival_lead,
                occupancy_end: scheduled_arrival + dwell,
            })
        })
        .collect()
}
