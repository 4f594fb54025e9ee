use crate::cli::commands::open_repository;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access::can_set_status;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::role::Caller;
use crate::ui::messages::success;
use crate::utils::date;

/// Change the status of one appointment.
pub fn handle(cmd: &Commands, cfg: &Config, caller: &Caller) -> AppResult<()> {
    if let Commands::Status { id, status } = cmd {
        let (mut pool, mut repo) = open_repository(cfg)?;

        let appt = repo
            .appointments
            .get(id)
            .ok_or_else(|| AppError::not_found("Appointment", id.as_str()))?;
        can_set_status(caller, appt, *status, date::now())?;
        let previous = appt.status;

        repo.appointments.update_status(id, *status);
        repo.save(&mut pool)?;

        ttlog(
            &pool.conn,
            "status",
            id,
            &format!("{} → {}", previous.to_db_str(), status.to_db_str()),
        )?;

        success(format!(
            "Appointment {} has been marked as {}.",
            id,
            status.to_db_str()
        ));
    }

    Ok(())
}
