//! Which role may do what.

use crate::errors::{AppError, AppResult};
use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::models::role::Caller;
use chrono::NaiveDateTime;

fn deny(what: &str, caller: &Caller) -> AppError {
    AppError::Forbidden(format!("{} cannot {}", caller.role.as_str(), what))
}

pub fn require_admin(caller: &Caller, what: &str) -> AppResult<()> {
    if caller.is_admin() {
        Ok(())
    } else {
        Err(deny(what, caller))
    }
}

pub fn require_admin_or_staff(caller: &Caller, what: &str) -> AppResult<()> {
    if caller.is_admin() || caller.is_staff() {
        Ok(())
    } else {
        Err(deny(what, caller))
    }
}

/// Admins may set any status, staff only on their own appointments. A
/// customer may only cancel one of their own scheduled appointments that has
/// not started yet.
pub fn can_set_status(
    caller: &Caller,
    appointment: &Appointment,
    status: AppointmentStatus,
    now: NaiveDateTime,
) -> AppResult<()> {
    if caller.is_admin() || (caller.is_staff() && appointment.staff_id == caller.id_str()) {
        return Ok(());
    }

    let own = caller.is_customer() && appointment.customer_id == caller.id_str();
    if own
        && status == AppointmentStatus::Cancelled
        && appointment.is_scheduled()
        && appointment.starts_at() > now
    {
        Ok(())
    } else {
        Err(deny(&format!("mark this appointment {}", status.to_db_str()), caller))
    }
}
