use crate::cli::commands::{open_repository, split_list};
use crate::cli::parser::{Commands, ServiceAction, ServiceFields};
use crate::config::Config;
use crate::core::access::{require_admin, require_admin_or_staff};
use crate::core::slots::check_duration;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::role::Caller;
use crate::models::service::Service;
use crate::ui::messages::{header, info, success};
use crate::utils::formatting::money;
use crate::utils::id::new_id;
use crate::utils::table::Table;
use crate::utils::time::format_duration;

fn apply(s: &mut Service, f: &ServiceFields) -> AppResult<()> {
    if let Some(v) = &f.name {
        s.name = v.trim().to_string();
    }
    if let Some(v) = &f.description {
        s.description = v.clone();
    }
    if let Some(v) = f.price {
        if !v.is_finite() || v < 0.0 {
            return Err(AppError::Validation(format!("invalid price: {v}")));
        }
        s.price = v;
    }
    if let Some(v) = f.duration {
        check_duration(v)?;
        s.duration = v;
    }
    if let Some(v) = &f.category {
        s.category = v.trim().to_string();
    }
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config, caller: &Caller) -> AppResult<()> {
    let Commands::Service { action } = cmd else {
        return Ok(());
    };

    let (mut pool, mut repo) = open_repository(cfg)?;

    match action {
        ServiceAction::Add { id, fields } => {
            require_admin(caller, "manage services")?;

            let mut s = Service {
                id: id.clone().unwrap_or_else(new_id),
                name: String::new(),
                description: String::new(),
                price: 0.0,
                duration: 60,
                category: "General".to_string(),
                staff_ids: Vec::new(),
            };
            apply(&mut s, fields)?;
            if s.name.is_empty() {
                return Err(AppError::Validation("service name is required".into()));
            }

            let (sid, sname) = (s.id.clone(), s.name.clone());
            repo.directory.add_service(s)?;
            for staff_id in fields.staff_ids.as_deref().map(split_list).unwrap_or_default() {
                repo.directory.staff_member(&staff_id)?;
                repo.directory.link(&sid, &staff_id);
            }
            repo.save(&mut pool)?;
            ttlog(&pool.conn, "add_service", &sid, &sname)?;
            success(format!("Service {sname} added with id {sid}."));
        }

        ServiceAction::Edit { id, fields } => {
            require_admin(caller, "manage services")?;

            let mut s = repo.directory.service(id)?.clone();
            apply(&mut s, fields)?;
            if let Some(list) = fields.staff_ids.as_deref() {
                s.staff_ids.clear();
                repo.directory.unlink_service(id);
                repo.directory.update_service(s)?;
                for staff_id in split_list(list) {
                    repo.directory.staff_member(&staff_id)?;
                    repo.directory.link(id, &staff_id);
                }
            } else {
                repo.directory.update_service(s)?;
            }
            repo.save(&mut pool)?;
            ttlog(&pool.conn, "edit_service", id, "service updated")?;
            success(format!("Service {id} updated."));
        }

        ServiceAction::Del { id } => {
            require_admin(caller, "manage services")?;

            let removed = repo.directory.remove_service(id)?;
            repo.directory.unlink_service(id);
            repo.save(&mut pool)?;
            ttlog(&pool.conn, "del", id, &format!("service {}", removed.name))?;
            success(format!("Service {} deleted.", removed.name));
        }

        ServiceAction::List { search, category } => {
            require_admin_or_staff(caller, "view services")?;

            let found = repo
                .directory
                .search_services(search.as_deref().unwrap_or(""), category);
            header(format!("Services ({})", repo.directory.categories().join(", ")));
            if found.is_empty() {
                info("No services found.");
                return Ok(());
            }

            let mut table = Table::new(["ID", "Name", "Category", "Duration", "Price", "Staff"]);
            for s in found {
                let staff: Vec<&str> = s
                    .staff_ids
                    .iter()
                    .filter_map(|id| repo.directory.staff_member(id).ok())
                    .map(|m| m.name.as_str())
                    .collect();
                table.add_row(vec![
                    s.id.clone(),
                    s.name.clone(),
                    s.category.clone(),
                    format_duration(s.duration),
                    money(&cfg.currency, s.price),
                    staff.join(", "),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
