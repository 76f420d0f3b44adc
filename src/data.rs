//! Master schedule fixture loading and CSV timetable import.

use crate::models::schedule::normalize_platform;
use crate::models::{DaysOfWeek, ScheduleEntry, TrainType};
use crate::time::parse_time_hm;
use serde::Deserialize;

#[derive(Deserialize)]
struct MasterSchedule {
    trains: Vec<ScheduleEntry>,
}

/// The schedule fixture bundled with the crate, loaded once per process
#[must_use]
pub fn master_schedule() -> Vec<ScheduleEntry> {
    match parse_schedule_json(include_str!("../data/schedule.json")) {
        Ok(trains) => trains,
        Err(err) => {
            log::error!("bundled schedule fixture is invalid: {err}");
            Vec::new()
        }
    }
}

/// Parse a JSON master schedule (`{"trains": [...]}`)
///
/// # Errors
///
/// Returns an error if the document is not valid JSON or an entry does not
/// match the schedule shape.
pub fn parse_schedule_json(json: &str) -> serde_json::Result<Vec<ScheduleEntry>> {
    let schedule: MasterSchedule = serde_json::from_str(json)?;
    Ok(schedule.trains)
}

/// Parse a CSV timetable export into schedule entries
///
/// Expected header: `train_number,train_name,train_type,station_code,platform,
/// running_days,arrival_time,departure_time,passenger_count`, with running
/// days pipe-separated (empty means daily). Malformed rows are skipped.
#[must_use]
pub fn parse_schedule_csv(csv_content: &str) -> Vec<ScheduleEntry> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_content.as_bytes());

    let mut entries = Vec::new();
    for record in reader.deserialize::<CsvRow>() {
        let Ok(row) = record else {
            log::debug!("skipping malformed timetable row");
            continue;
        };
        entries.push(row.into_entry());
    }
    entries
}

#[derive(Deserialize)]
struct CsvRow {
    train_number: String,
    train_name: String,
    train_type: String,
    station_code: String,
    #[serde(default)]
    platform: String,
    #[serde(default)]
    running_days: String,
    #[serde(default)]
    arrival_time: String,
    #[serde(default)]
    departure_time: String,
    #[serde(default)]
    passenger_count: Option<u32>,
}

impl CsvRow {
    fn into_entry(self) -> ScheduleEntry {
        let running_days = if self.running_days.trim().is_empty() {
            DaysOfWeek::ALL_DAYS
        } else {
            DaysOfWeek::from_codes(self.running_days.split('|'))
        };

        ScheduleEntry {
            train_type: TrainType::from_code(&self.train_type),
            platform: normalize_platform(Some(self.platform)),
            running_days,
            arrival_time: parse_time_hm(&self.arrival_time).ok(),
            departure_time: parse_time_hm(&self.departure_time).ok(),
            train_number: self.train_number,
            train_name: self.train_name,
            station_code: self.station_code,
            passenger_count: self.passenger_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_schedule_loads() {
        let schedule = master_schedule();
        assert!(schedule.len() >= 20);
        assert!(schedule.iter().any(|e| e.train_number == "12951"));
        assert!(schedule.iter().any(|e| e.train_number == "11041"));
    }

    #[test]
    fn test_master_schedule_has_unassigned_platforms() {
        let schedule = master_schedule();
        assert!(schedule.iter().any(|e| e.platform.is_none()));
    }

    #[test]
    fn test_master_schedule_has_entries_without_counts() {
        // Some entries leave passenger counts to synthesis
        let schedule = master_schedule();
        assert!(schedule.iter().any(|e| e.passenger_count.is_none()));
        assert!(schedule.iter().any(|e| e.passenger_count.is_some()));
    }

    #[test]
    fn test_parse_schedule_json_invalid() {
        assert!(parse_schedule_json("not json").is_err());
        assert!(parse_schedule_json(r#"{"trains": [{"train_number": 5}]}"#).is_err());
    }

    #[test]
    fn test_parse_schedule_csv_simple() {
        let csv_content = "\
train_number,train_name,train_type,station_code,platform,running_days,arrival_time,departure_time,passenger_count
12951,Mumbai Rajdhani,Rajdhani,NDLS,3,Mon|Tue|Wed,10:05,10:25,1150
64052,EMU Local,MEMU,GZB,--,,07:12,07:14,
";
        let entries = parse_schedule_csv(csv_content);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].train_type, TrainType::Rajdhani);
        assert_eq!(entries[0].platform.as_deref(), Some("3"));
        assert_eq!(
            entries[0].running_days,
            DaysOfWeek::MONDAY | DaysOfWeek::TUESDAY | DaysOfWeek::WEDNESDAY
        );
        assert_eq!(entries[0].passenger_count, Some(1150));

        assert_eq!(entries[1].train_type, TrainType::Memu);
        assert_eq!(entries[1].platform, None);
        assert!(entries[1].running_days.is_all_days());
        assert_eq!(entries[1].passenger_count, None);
    }

    #[test]
    fn test_parse_schedule_csv_missing_times() {
        let csv_content = "\
train_number,train_name,train_type,station_code,platform,running_days,arrival_time,departure_time,passenger_count
G4612,Goods,Freight,GZB,,,,,
";
        let entries = parse_schedule_csv(csv_content);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].arrival_time, None);
        assert_eq!(entries[0].departure_time, None);
    }

    #[test]
    fn test_parse_schedule_csv_empty() {
        assert!(parse_schedule_csv("").is_empty());
    }
}
