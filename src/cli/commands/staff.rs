use crate::cli::commands::{open_repository, split_list};
use crate::cli::parser::{Commands, StaffAction, StaffFields};
use crate::config::Config;
use crate::core::access::require_admin;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::role::Caller;
use crate::models::staff::{StaffMember, WeeklySchedule};
use crate::ui::messages::{header, info, success};
use crate::utils::formatting::rating;
use crate::utils::id::new_id;
use crate::utils::table::Table;

fn parse_days(raw: &str) -> AppResult<WeeklySchedule> {
    WeeklySchedule::from_days(raw)
        .ok_or_else(|| AppError::Validation(format!("invalid day list: '{raw}' (use e.g. mon,tue,sat)")))
}

fn apply(m: &mut StaffMember, f: &StaffFields) -> AppResult<()> {
    if let Some(v) = &f.name {
        m.name = v.trim().to_string();
    }
    if let Some(v) = &f.email {
        m.email = v.trim().to_string();
    }
    if let Some(v) = &f.phone {
        m.phone = v.trim().to_string();
    }
    if let Some(v) = &f.position {
        m.position = v.trim().to_string();
    }
    if let Some(v) = &f.bio {
        m.bio = v.clone();
    }
    if let Some(v) = &f.days {
        m.schedule = parse_days(v)?;
    }
    if let Some(v) = f.rating {
        if !(0.0..=5.0).contains(&v) {
            return Err(AppError::Validation(format!("rating must be between 0 and 5: {v}")));
        }
        m.rating = v;
    }
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config, caller: &Caller) -> AppResult<()> {
    let Commands::Staff { action } = cmd else {
        return Ok(());
    };
    require_admin(caller, "manage staff")?;

    let (mut pool, mut repo) = open_repository(cfg)?;

    match action {
        StaffAction::Add { id, fields } => {
            let mut m = StaffMember {
                id: id.clone().unwrap_or_else(new_id),
                name: String::new(),
                email: String::new(),
                phone: String::new(),
                position: String::new(),
                bio: String::new(),
                service_ids: Vec::new(),
                schedule: WeeklySchedule::default(),
                rating: 0.0,
                appointments_completed: 0,
            };
            apply(&mut m, fields)?;
            if m.name.is_empty() {
                return Err(AppError::Validation("staff name is required".into()));
            }

            let (mid, mname) = (m.id.clone(), m.name.clone());
            repo.directory.add_staff(m)?;
            for service_id in fields.service_ids.as_deref().map(split_list).unwrap_or_default() {
                repo.directory.service(&service_id)?;
                repo.directory.link(&service_id, &mid);
            }
            repo.save(&mut pool)?;
            ttlog(&pool.conn, "add_staff", &mid, &mname)?;
            success(format!("Staff member {mname} added with id {mid}."));
        }

        StaffAction::Edit { id, fields } => {
            let mut m = repo.directory.staff_member(id)?.clone();
            apply(&mut m, fields)?;
            if let Some(list) = fields.service_ids.as_deref() {
                m.service_ids.clear();
                repo.directory.unlink_staff(id);
                repo.directory.update_staff(m)?;
                for service_id in split_list(list) {
                    repo.directory.service(&service_id)?;
                    repo.directory.link(&service_id, id);
                }
            } else {
                repo.directory.update_staff(m)?;
            }
            repo.save(&mut pool)?;
            ttlog(&pool.conn, "edit_staff", id, "staff member updated")?;
            success(format!("Staff member {id} updated."));
        }

        StaffAction::Schedule { id, days } => {
            let mut m = repo.directory.staff_member(id)?.clone();
            m.schedule = parse_days(days)?;
            let described = m.schedule.describe();
            repo.directory.update_staff(m)?;
            repo.save(&mut pool)?;
            ttlog(&pool.conn, "edit_staff", id, &format!("schedule: {described}"))?;
            success(format!("Schedule of {id} set to: {described}"));
        }

        StaffAction::Del { id } => {
            let removed = repo.directory.remove_staff(id)?;
            repo.directory.unlink_staff(id);
            repo.save(&mut pool)?;
            ttlog(&pool.conn, "del", id, &format!("staff {}", removed.name))?;
            success(format!("Staff member {} deleted.", removed.name));
        }

        StaffAction::List { search, position } => {
            let found = repo
                .directory
                .search_staff(search.as_deref().unwrap_or(""), position);
            header(format!("Staff ({})", repo.directory.positions().join(", ")));
            if found.is_empty() {
                info("No staff members found.");
                return Ok(());
            }

            let mut table = Table::new(["ID", "Name", "Position", "Days", "Rating", "Done", "Services"]);
            for m in found {
                let services: Vec<&str> = m
                    .service_ids
                    .iter()
                    .filter_map(|id| repo.directory.service(id).ok())
                    .map(|s| s.name.as_str())
                    .collect();
                table.add_row(vec![
                    m.id.clone(),
                    m.name.clone(),
                    m.position.clone(),
                    m.schedule.describe(),
                    rating(m.rating),
                    m.appointments_completed.to_string(),
                    services.join(", "),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
