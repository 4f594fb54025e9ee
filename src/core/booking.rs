//! Turning a booking request into a scheduled appointment.

use crate::config::Config;
use crate::core::directory::Directory;
use crate::core::slots::{
    check_duration, compute_end_time, crosses_midnight, find_conflicts, works_on,
};
use crate::core::store::AppointmentStore;
use crate::errors::{AppError, AppResult};
use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::models::role::Caller;
use crate::ui::messages::warning;
use crate::utils::id::new_id;
use crate::utils::time::parse_time;
use chrono::NaiveDate;

/// Raw booking input as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct BookingRequest {
    pub customer_id: Option<String>,
    pub service_id: Option<String>,
    pub staff_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
}

/// Optional checks applied on top of the plain booking flow.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingPolicy {
    pub check_conflicts: bool,
    pub enforce_schedule: bool,
}

impl From<&Config> for BookingPolicy {
    fn from(cfg: &Config) -> Self {
        Self {
            check_conflicts: cfg.check_conflicts,
            enforce_schedule: cfg.enforce_schedule,
        }
    }
}

fn required(value: Option<String>, field: &str) -> AppResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(AppError::Validation(format!("Please select a {field}"))),
    }
}

pub struct BookingLogic;

impl BookingLogic {
    /// Validate `req` and assemble the appointment it describes.
    ///
    /// A customer caller always books for themselves.
    pub fn build(
        req: BookingRequest,
        caller: &Caller,
        directory: &Directory,
        store: &AppointmentStore,
        policy: BookingPolicy,
    ) -> AppResult<Appointment> {
        let customer_id = if caller.is_customer() {
            Some(caller.id_str().to_string())
        } else {
            req.customer_id
        };

        let customer_id = required(customer_id, "customer")?;
        let service_id = required(req.service_id, "service")?;
        let staff_id = required(req.staff_id, "staff member")?;
        let date = req
            .date
            .ok_or_else(|| AppError::Validation("Please select a date".into()))?;
        let time = required(req.time, "time")?;
        let start = parse_time(&time).ok_or_else(|| AppError::InvalidTime(time.clone()))?;

        let customer = directory.customer(&customer_id)?;
        let service = directory.service(&service_id)?;
        let staff = directory.staff_member(&staff_id)?;

        if !service.performed_by(&staff.id) {
            return Err(AppError::Validation(format!(
                "{} does not perform {}",
                staff.name, service.name
            )));
        }

        check_duration(service.duration)?;

        if policy.enforce_schedule && !works_on(staff, date) {
            return Err(AppError::Conflict(format!(
                "{} does not work on {}",
                staff.name,
                date.format("%A %Y-%m-%d")
            )));
        }

        let end = compute_end_time(start, service.duration);

        if crosses_midnight(start, service.duration) {
            warning(format!(
                "{} at {} runs past midnight; end time wraps to {}",
                service.name,
                time,
                end.format("%H:%M")
            ));
        }

        if policy.check_conflicts {
            let clashes = find_conflicts(store.all(), &staff.id, date, start, end);
            if let Some(first) = clashes.first() {
                return Err(AppError::Conflict(format!(
                    "{} is already booked {}-{} on {} ({})",
                    staff.name,
                    first.start_str(),
                    first.end_str(),
                    first.date_str(),
                    first.service_name
                )));
            }
        }

        Ok(Appointment {
            id: new_id(),
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            service_id: service.id.clone(),
            service_name: service.name.clone(),
            staff_id: staff.id.clone(),
            staff_name: staff.name.clone(),
            date,
            start_time: start,
            end_time: end,
            status: AppointmentStatus::Scheduled,
            price: service.price,
        })
    }

    /// Build and append in one step.
    pub fn book(
        req: BookingRequest,
        caller: &Caller,
        directory: &Directory,
        store: &mut AppointmentStore,
        policy: BookingPolicy,
    ) -> AppResult<Appointment> {
        let appointment = Self::build(req, caller, directory, store, policy)?;
        store.add(appointment.clone());
        Ok(appointment)
    }
}
