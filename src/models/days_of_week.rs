use chrono::Weekday;
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DaysOfWeek: u8 {
        const MONDAY    = 0b0000_0001;
        const TUESDAY   = 0b0000_0010;
        const WEDNESDAY = 0b0000_0100;
        const THURSDAY  = 0b0000_1000;
        const FRIDAY    = 0b0001_0000;
        const SATURDAY  = 0b0010_0000;
        const SUNDAY    = 0b0100_0000;
        const ALL_DAYS  = Self::MONDAY.bits() | Self::TUESDAY.bits() | Self::WEDNESDAY.bits()
                        | Self::THURSDAY.bits() | Self::FRIDAY.bits() | Self::SATURDAY.bits()
                        | Self::SUNDAY.bits();
        const WEEKDAYS  = Self::MONDAY.bits() | Self::TUESDAY.bits() | Self::WEDNESDAY.bits()
                        | Self::THURSDAY.bits() | Self::FRIDAY.bits();
        const WEEKENDS  = Self::SATURDAY.bits() | Self::SUNDAY.bits();
    }
}

impl Default for DaysOfWeek {
    fn default() -> Self {
        Self::ALL_DAYS
    }
}

impl DaysOfWeek {
    /// Check if all days are enabled
    #[must_use]
    pub const fn is_all_days(self) -> bool {
        self.bits() == Self::ALL_DAYS.bits()
    }

    /// Single day flag for a chrono weekday
    #[must_use]
    pub const fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::MONDAY,
            Weekday::Tue => Self::TUESDAY,
            Weekday::Wed => Self::WEDNESDAY,
            Weekday::Thu => Self::THURSDAY,
            Weekday::Fri => Self::FRIDAY,
            Weekday::Sat => Self::SATURDAY,
            Weekday::Sun => Self::SUNDAY,
        }
    }

    /// Whether the set includes the given chrono weekday
    #[must_use]
    pub const fn contains_weekday(self, weekday: Weekday) -> bool {
        self.contains(Self::from_weekday(weekday))
    }

    /// Parse a running-day code as found in timetable data
    ///
    /// Accepts short names ("Mon".."Sun", any case) and the unambiguous
    /// single/double-letter codes ("M", "Tu", "W", "Th", "F", "Sa", "Su").
    /// Returns `None` for unrecognized codes.
    #[must_use]
    pub fn parse_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "m" | "mon" | "monday" => Some(Self::MONDAY),
            "tu" | "tue" | "tuesday" => Some(Self::TUESDAY),
            "w" | "wed" | "wednesday" => Some(Self::WEDNESDAY),
            "th" | "thu" | "thursday" => Some(Self::THURSDAY),
            "f" | "fri" | "friday" => Some(Self::FRIDAY),
            "sa" | "sat" | "saturday" => Some(Self::SATURDAY),
            "su" | "sun" | "sunday" => Some(Self::SUNDAY),
            _ => None,
        }
    }

    /// Collect a set from a list of day codes, ignoring unrecognized entries
    #[must_use]
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes
            .into_iter()
            .filter_map(|c| Self::parse_code(c.as_ref()))
            .fold(Self::empty(), |acc, day| acc | day)
    }

    /// Short names of the enabled days, Monday first
    #[must_use]
    pub fn short_names(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Self::MONDAY) { names.push("Mon"); }
        if self.contains(Self::TUESDAY) { names.push("Tue"); }
        if self.contains(Self::WEDNESDAY) { names.push("Wed"); }
        if self.contains(Self::THURSDAY) { names.push("Thu"); }
        if self.contains(Self::FRIDAY) { names.push("Fri"); }
        if self.contains(Self::SATURDAY) { names.push("Sat"); }
        if self.contains(Self::SUNDAY) { names.push("Sun"); }
        names
    }

    /// Get a human-readable string representation
    #[must_use]
    pub fn to_display_string(self) -> String {
        if self.is_all_days() {
            return "All days".to_string();
        }
        if self == Self::WEEKDAYS {
            return "Weekdays".to_string();
        }
        if self == Self::WEEKENDS {
            return "Weekends".to_string();
        }
        self.short_names().join(", ")
    }
}

/// Short weekday name for a chrono weekday ("Mon".."Sun")
#[must_use]
pub const fn weekday_short_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

// Stored in fixtures as a list of day codes rather than raw bits
impl Serialize for DaysOfWeek {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.short_names().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DaysOfWeek {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let codes = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_codes(&codes))
    }
}
