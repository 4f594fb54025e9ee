use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
}

impl Default for WeeklySchedule {
    /// Monday to Friday.
    fn default() -> Self {
        Self {
            monday: true,
            tuesday: true,
            wednesday: true,
            thursday: true,
            friday: true,
            saturday: false,
            sunday: false,
        }
    }
}

impl WeeklySchedule {
    pub fn works_on(&self, day: Weekday) -> bool {
        match day {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    /// Parse a comma separated day list such as `mon,tue,sat`.
    pub fn from_days(days: &str) -> Option<Self> {
        let mut s = Self {
            monday: false,
            tuesday: false,
            wednesday: false,
            thursday: false,
            friday: false,
            saturday: false,
            sunday: false,
        };

        for raw in days.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            let day: Weekday = raw.parse().ok()?;
            match day {
                Weekday::Mon => s.monday = true,
                Weekday::Tue => s.tuesday = true,
                Weekday::Wed => s.wednesday = true,
                Weekday::Thu => s.thursday = true,
                Weekday::Fri => s.friday = true,
                Weekday::Sat => s.saturday = true,
                Weekday::Sun => s.sunday = true,
            }
        }
        Some(s)
    }

    /// Short form, e.g. `Mon Tue Fri`.
    pub fn describe(&self) -> String {
        [
            (self.monday, "Mon"),
            (self.tuesday, "Tue"),
            (self.wednesday, "Wed"),
            (self.thursday, "Thu"),
            (self.friday, "Fri"),
            (self.saturday, "Sat"),
            (self.sunday, "Sun"),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, d)| *d)
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub bio: String,
    /// Services this member can perform.
    #[serde(default)]
    pub service_ids: Vec<String>,
    #[serde(default)]
    pub schedule: WeeklySchedule,
    pub rating: f64,
    pub appointments_completed: u32,
}
