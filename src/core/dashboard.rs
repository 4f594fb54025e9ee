use crate::core::view::visible_to;
use crate::models::appointment::Appointment;
use crate::models::role::Caller;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardStats {
    pub today_appointments: usize,
    pub upcoming_appointments: usize,
    pub revenue: f64,
    pub customers: usize,
    pub staff: usize,
}

pub struct DashboardLogic;

impl DashboardLogic {
    /// Figures over the appointments visible to `caller`. Revenue is the sum
    /// of booked prices regardless of status.
    pub fn build(
        caller: &Caller,
        appointments: &[Appointment],
        customers: usize,
        staff: usize,
        now: NaiveDateTime,
    ) -> DashboardStats {
        let visible = visible_to(caller, appointments);

        DashboardStats {
            today_appointments: visible.iter().filter(|a| a.date == now.date()).count(),
            upcoming_appointments: visible
                .iter()
                .filter(|a| a.is_scheduled() && a.starts_at() > now)
                .count(),
            revenue: visible.iter().map(|a| a.price).sum(),
            customers,
            staff,
        }
    }
}
