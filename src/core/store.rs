//! In-memory appointment list with add / status update / filtered query.

use crate::core::view::AppointmentQuery;
use crate::models::appointment::{Appointment, AppointmentStatus};
use chrono::NaiveDateTime;

#[derive(Debug, Default, Clone)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
}

impl AppointmentStore {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }

    /// Append a fully formed record. Ids and time slots are not checked.
    pub fn add(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
    }

    /// Set the status of the appointment with the given id.
    ///
    /// Any status may replace any other. Returns `false` when no record
    /// matches, in which case nothing changes.
    pub fn update_status(&mut self, id: &str, status: AppointmentStatus) -> bool {
        match self.appointments.iter_mut().find(|a| a.id == id) {
            Some(a) => {
                a.status = status;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Records matching `query`, in insertion order.
    pub fn query(&self, query: &AppointmentQuery, now: NaiveDateTime) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| query.matches(a, now))
            .collect()
    }

    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn into_inner(self) -> Vec<Appointment> {
        self.appointments
    }
}
