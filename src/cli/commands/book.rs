use crate::cli::commands::open_repository;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::booking::{BookingLogic, BookingPolicy, BookingRequest};
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::role::Caller;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::money;

/// Book a new appointment.
pub fn handle(cmd: &Commands, cfg: &Config, caller: &Caller) -> AppResult<()> {
    if let Commands::Book {
        customer,
        service,
        staff,
        date: date_str,
        time,
    } = cmd
    {
        //
        // 1. Parse date (presence is checked by the booking logic)
        //
        let d = match date_str {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let req = BookingRequest {
            customer_id: customer.clone(),
            service_id: service.clone(),
            staff_id: staff.clone(),
            date: d,
            time: time.clone(),
        };

        //
        // 2. Build and store
        //
        let (mut pool, mut repo) = open_repository(cfg)?;
        let appt = BookingLogic::book(
            req,
            caller,
            &repo.directory,
            &mut repo.appointments,
            BookingPolicy::from(cfg),
        )?;
        repo.save(&mut pool)?;

        ttlog(
            &pool.conn,
            "book",
            &appt.id,
            &format!(
                "{} / {} with {} on {} {}-{}",
                appt.customer_name,
                appt.service_name,
                appt.staff_name,
                appt.date_str(),
                appt.start_str(),
                appt.end_str()
            ),
        )?;

        success(format!(
            "Appointment {} booked for {} on {} at {}-{} with {} ({})",
            appt.id,
            appt.customer_name,
            appt.date.format("%B %-d, %Y"),
            appt.start_str(),
            appt.end_str(),
            appt.staff_name,
            money(&cfg.currency, appt.price)
        ));
    }

    Ok(())
}
