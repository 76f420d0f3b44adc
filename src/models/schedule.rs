//! Static timetable entries, the read-only input to the engine.

use super::DaysOfWeek;
use crate::time::serde_opt_hm;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Train category codes as they appear in timetable data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrainType {
    Rajdhani,
    Shatabdi,
    VandeBharat,
    Superfast,
    Duronto,
    Express,
    Mail,
    SamparkKranti,
    Humsafar,
    Passenger,
    Local,
    Demu,
    Memu,
    Freight,
    Other,
}

impl TrainType {
    /// Parse a timetable type code; unrecognized codes map to `Other`
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "Rajdhani" => Self::Rajdhani,
            "Shatabdi" => Self::Shatabdi,
            "VB" => Self::VandeBharat,
            "SF" => Self::Superfast,
            "Drnt" => Self::Duronto,
            "Exp" => Self::Express,
            "Mail" => Self::Mail,
            "SKr" => Self::SamparkKranti,
            "Hms" => Self::Humsafar,
            "Pass" => Self::Passenger,
            "Local" => Self::Local,
            "DEMU" => Self::Demu,
            "MEMU" => Self::Memu,
            "Freight" => Self::Freight,
            _ => Self::Other,
        }
    }

    /// The timetable code for this type
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Rajdhani => "Rajdhani",
            Self::Shatabdi => "Shatabdi",
            Self::VandeBharat => "VB",
            Self::Superfast => "SF",
            Self::Duronto => "Drnt",
            Self::Express => "Exp",
            Self::Mail => "Mail",
            Self::SamparkKranti => "SKr",
            Self::Humsafar => "Hms",
            Self::Passenger => "Pass",
            Self::Local => "Local",
            Self::Demu => "DEMU",
            Self::Memu => "MEMU",
            Self::Freight => "Freight",
            Self::Other => "Other",
        }
    }
}

impl From<String> for TrainType {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<TrainType> for String {
    fn from(train_type: TrainType) -> Self {
        train_type.code().to_string()
    }
}

/// Precedence class of a train at a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Normal,
    Low,
}

impl From<TrainType> for Priority {
    fn from(train_type: TrainType) -> Self {
        match train_type {
            TrainType::Rajdhani
            | TrainType::Shatabdi
            | TrainType::VandeBharat
            | TrainType::Superfast => Self::High,
            TrainType::Express | TrainType::Mail => Self::Normal,
            _ => Self::Low,
        }
    }
}

/// One scheduled call at a station, loaded once per process and never mutated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub train_number: String,
    pub train_name: String,
    pub train_type: TrainType,
    pub station_code: String,
    /// `None` means no platform has been assigned
    #[serde(default, deserialize_with = "deserialize_platform")]
    pub platform: Option<String>,
    #[serde(default)]
    pub running_days: DaysOfWeek,
    #[serde(default, with = "serde_opt_hm")]
    pub arrival_time: Option<NaiveTime>,
    #[serde(default, with = "serde_opt_hm")]
    pub departure_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_count: Option<u32>,
}

/// Map timetable platform sentinels ("--", "N/A", empty) to `None`
#[must_use]
pub(crate) fn normalize_platform(platform: Option<String>) -> Option<String> {
    platform.filter(|p| !p.is_empty() && p != "--" && p != "N/A")
}

fn deserialize_platform<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(normalize_platform(value))
}
