//! Role-based visibility, free-text search and status category filter.

use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::models::role::{Caller, Role};
use crate::models::status_category::StatusCategory;
use chrono::NaiveDateTime;

/// True when `caller` is allowed to see `appointment`.
pub fn is_visible(caller: &Caller, appointment: &Appointment) -> bool {
    match caller.role {
        Role::Admin => true,
        Role::Staff => appointment.staff_id == caller.id_str(),
        Role::Customer => appointment.customer_id == caller.id_str(),
    }
}

/// Subset of `appointments` visible to `caller`.
pub fn visible_to<'a>(caller: &Caller, appointments: &'a [Appointment]) -> Vec<&'a Appointment> {
    appointments
        .iter()
        .filter(|a| is_visible(caller, a))
        .collect()
}

/// Case-insensitive substring match over customer, service and staff names.
/// An empty query matches everything.
pub fn matches_search(appointment: &Appointment, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }

    appointment.customer_name.to_lowercase().contains(&q)
        || appointment.service_name.to_lowercase().contains(&q)
        || appointment.staff_name.to_lowercase().contains(&q)
}

/// `Upcoming` requires a scheduled appointment starting strictly after `now`.
pub fn matches_category(appointment: &Appointment, category: StatusCategory, now: NaiveDateTime) -> bool {
    match category {
        StatusCategory::All => true,
        StatusCategory::Upcoming => appointment.is_scheduled() && appointment.starts_at() > now,
        StatusCategory::Completed => appointment.status == AppointmentStatus::Completed,
        StatusCategory::Cancelled => appointment.status == AppointmentStatus::Cancelled,
    }
}

/// The three appointment filters, ANDed together.
#[derive(Debug, Clone)]
pub struct AppointmentQuery {
    pub caller: Caller,
    pub search: Option<String>,
    pub category: StatusCategory,
}

impl AppointmentQuery {
    pub fn for_caller(caller: Caller) -> Self {
        Self {
            caller,
            search: None,
            category: StatusCategory::All,
        }
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn category(mut self, category: StatusCategory) -> Self {
        self.category = category;
        self
    }

    pub fn matches(&self, appointment: &Appointment, now: NaiveDateTime) -> bool {
        is_visible(&self.caller, appointment)
            && matches_category(appointment, self.category, now)
            && self
                .search
                .as_deref()
                .is_none_or(|q| matches_search(appointment, q))
    }
}
