use clap::ValueEnum;

/// UI-level grouping of appointments, distinct from `AppointmentStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StatusCategory {
    #[default]
    All,
    Upcoming,
    Completed,
    Cancelled,
}

impl StatusCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::All => "all",
            StatusCategory::Upcoming => "upcoming",
            StatusCategory::Completed => "completed",
            StatusCategory::Cancelled => "cancelled",
        }
    }
}
