use crate::error::ScheduleError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Business hours for a single weekday. `start`/`end` are wall-clock "HH:MM"
/// strings at minute resolution. An `end` numerically earlier than `start`
/// denotes an overnight shift wrapping past midnight.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DayHours {
    pub active: bool,
    pub start: String,
    pub end: String,
}

impl DayHours {
    pub fn open(start: &str, end: &str) -> Self {
        Self {
            active: true,
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    pub fn closed() -> Self {
        Self {
            active: false,
            start: "09:00".to_string(),
            end: "18:00".to_string(),
        }
    }
}

impl Default for DayHours {
    fn default() -> Self {
        Self::closed()
    }
}

/// One fixed weekly template per detailer: exactly seven entries, one per
/// weekday. Days absent from a serialized document deserialize as inactive.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WeeklyAvailability {
    pub monday: DayHours,
    pub tuesday: DayHours,
    pub wednesday: DayHours,
    pub thursday: DayHours,
    pub friday: DayHours,
    pub saturday: DayHours,
    pub sunday: DayHours,
}

impl Default for WeeklyAvailability {
    // All days closed, so a day absent from a stored document yields no slots.
    fn default() -> Self {
        Self {
            monday: DayHours::closed(),
            tuesday: DayHours::closed(),
            wednesday: DayHours::closed(),
            thursday: DayHours::closed(),
            friday: DayHours::closed(),
            saturday: DayHours::closed(),
            sunday: DayHours::closed(),
        }
    }
}

impl WeeklyAvailability {
    /// The dashboard's seeded grid: Monday-Saturday 09:00-18:00, Sunday off.
    pub fn standard() -> Self {
        Self {
            monday: DayHours::open("09:00", "18:00"),
            tuesday: DayHours::open("09:00", "18:00"),
            wednesday: DayHours::open("09:00", "18:00"),
            thursday: DayHours::open("09:00", "18:00"),
            friday: DayHours::open("09:00", "18:00"),
            saturday: DayHours::open("09:00", "18:00"),
            sunday: DayHours::closed(),
        }
    }

    pub fn for_weekday(&self, weekday: Weekday) -> &DayHours {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn for_weekday_mut(&mut self, weekday: Weekday) -> &mut DayHours {
        match weekday {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    /// Parses the stored JSON document form of the template.
    pub fn from_json(raw: &str) -> Result<Self, ScheduleError> {
        serde_json::from_str(raw)
            .map_err(|e| ScheduleError::Validation(format!("Invalid availability template: {}", e)))
    }
}
