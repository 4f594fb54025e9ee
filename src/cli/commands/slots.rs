use crate::cli::commands::open_repository;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::slots::{compute_end_time, free_slots, qualified_staff, time_slots, works_on};
use crate::errors::{AppError, AppResult};
use crate::models::staff::StaffMember;
use crate::ui::messages::{header, info, warning};
use crate::utils::date;
use crate::utils::time::{format_duration, format_time};

/// Free start times per qualified staff member for a service on a date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Slots {
        service,
        staff,
        date: date_str,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;
        let (_pool, repo) = open_repository(cfg)?;

        let svc = repo.directory.service(service)?;
        let candidates: Vec<&StaffMember> = match staff {
            Some(id) => vec![repo.directory.staff_member(id)?],
            None => qualified_staff(svc, &repo.directory.staff),
        };

        let (open, close) = cfg.opening_hours()?;
        let all = time_slots(open, close, cfg.slot_interval);

        header(format!(
            "{} ({}) on {}",
            svc.name,
            format_duration(svc.duration),
            d.format("%A %Y-%m-%d")
        ));

        if candidates.is_empty() {
            info("No staff member performs this service.");
            return Ok(());
        }

        for member in candidates {
            if !svc.performed_by(&member.id) {
                warning(format!("{} does not perform {}", member.name, svc.name));
                continue;
            }
            if !works_on(member, d) {
                println!("{}: not working", member.name);
                continue;
            }

            let free = free_slots(repo.appointments.all(), &member.id, d, &all, svc.duration);
            let rendered: Vec<String> = free
                .iter()
                .map(|t| format!("{}-{}", format_time(*t), format_time(compute_end_time(*t, svc.duration))))
                .collect();

            if rendered.is_empty() {
                println!("{}: fully booked", member.name);
            } else {
                println!("{}: {}", member.name, rendered.join("  "));
            }
        }
    }

    Ok(())
}
