//! Slot arithmetic: end times, bookable start times, staff availability.

use crate::errors::{AppError, AppResult};
use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::models::service::Service;
use crate::models::staff::StaffMember;
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Longest service a single booking may hold: end times wrap at most once.
pub const MAX_DURATION: u32 = MINUTES_PER_DAY - 1;

/// Service durations must be between 1 and [`MAX_DURATION`] minutes.
pub fn check_duration(duration_minutes: u32) -> AppResult<()> {
    if duration_minutes == 0 || duration_minutes > MAX_DURATION {
        return Err(AppError::Validation(format!(
            "duration must be between 1 and {MAX_DURATION} minutes: {duration_minutes}"
        )));
    }
    Ok(())
}

/// Start time plus `duration_minutes`, in clock arithmetic.
///
/// The result wraps past midnight (`23:30` + 60 → `00:30`); the caller keeps
/// the booking date.
pub fn compute_end_time(start: NaiveTime, duration_minutes: u32) -> NaiveTime {
    let (end, _) = start.overflowing_add_signed(Duration::minutes(i64::from(duration_minutes)));
    end
}

/// True when the service would run past midnight.
pub fn crosses_midnight(start: NaiveTime, duration_minutes: u32) -> bool {
    let start_min = start.hour() * 60 + start.minute();
    start_min.saturating_add(duration_minutes) >= MINUTES_PER_DAY
}

/// Bookable start times from `open` (inclusive) to `close` (exclusive),
/// every `interval` minutes.
pub fn time_slots(open: NaiveTime, close: NaiveTime, interval: u32) -> Vec<NaiveTime> {
    let mut out = Vec::new();
    if interval == 0 {
        return out;
    }

    let step = Duration::minutes(i64::from(interval));
    let mut t = open;
    while t < close {
        out.push(t);
        let (next, wrapped) = t.overflowing_add_signed(step);
        if wrapped != 0 {
            break;
        }
        t = next;
    }
    out
}

/// Staff members listed as able to perform `service`.
pub fn qualified_staff<'a>(service: &Service, staff: &'a [StaffMember]) -> Vec<&'a StaffMember> {
    staff.iter().filter(|m| service.performed_by(&m.id)).collect()
}

/// Weekday schedule check.
pub fn works_on(staff: &StaffMember, date: NaiveDate) -> bool {
    staff.schedule.works_on(date.weekday())
}

/// Minutes since midnight of the slot end; a wrapped end counts as 24:00.
fn end_minutes(start: NaiveTime, end: NaiveTime) -> u32 {
    let e = end.hour() * 60 + end.minute();
    let s = start.hour() * 60 + start.minute();
    if e < s { MINUTES_PER_DAY } else { e }
}

fn start_minutes(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Non-cancelled appointments of `staff_id` on `date` overlapping `[start, end)`.
pub fn find_conflicts<'a>(
    appointments: &'a [Appointment],
    staff_id: &str,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> Vec<&'a Appointment> {
    let (s, e) = (start_minutes(start), end_minutes(start, end));

    appointments
        .iter()
        .filter(|a| a.staff_id == staff_id && a.date == date)
        .filter(|a| a.status != AppointmentStatus::Cancelled)
        .filter(|a| {
            let (as_, ae) = (start_minutes(a.start_time), end_minutes(a.start_time, a.end_time));
            s < ae && as_ < e
        })
        .collect()
}

/// Start slots on `date` where `staff_id` could take a service of
/// `duration_minutes` without overlapping an existing booking.
pub fn free_slots(
    appointments: &[Appointment],
    staff_id: &str,
    date: NaiveDate,
    slots: &[NaiveTime],
    duration_minutes: u32,
) -> Vec<NaiveTime> {
    slots
        .iter()
        .copied()
        .filter(|&t| {
            let end = compute_end_time(t, duration_minutes);
            find_conflicts(appointments, staff_id, date, t, end).is_empty()
        })
        .collect()
}
