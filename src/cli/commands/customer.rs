use crate::cli::commands::{open_repository, split_list};
use crate::cli::parser::{Commands, CustomerAction, CustomerFields};
use crate::config::Config;
use crate::core::access::require_admin;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::customer::Customer;
use crate::models::role::Caller;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::formatting::money;
use crate::utils::id::new_id;
use crate::utils::table::Table;

fn apply(c: &mut Customer, f: &CustomerFields) {
    if let Some(v) = &f.name {
        c.name = v.trim().to_string();
    }
    if let Some(v) = &f.email {
        c.email = v.trim().to_string();
    }
    if let Some(v) = &f.phone {
        c.phone = v.trim().to_string();
    }
    if let Some(v) = &f.notes {
        c.notes = Some(v.clone()).filter(|n| !n.trim().is_empty());
    }
    if let Some(v) = &f.preferences {
        c.preferences = split_list(v);
    }
    if let Some(v) = f.advance {
        c.advance_balance = Some(v);
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, caller: &Caller) -> AppResult<()> {
    let Commands::Customer { action } = cmd else {
        return Ok(());
    };
    require_admin(caller, "manage customers")?;

    let (mut pool, mut repo) = open_repository(cfg)?;

    match action {
        CustomerAction::Add { id, fields } => {
            let name = fields
                .name
                .clone()
                .filter(|n| !n.trim().is_empty())
                .ok_or_else(|| AppError::Validation("customer name is required".into()))?;
            let email = fields
                .email
                .clone()
                .ok_or_else(|| AppError::Validation("customer email is required".into()))?;

            let mut c = Customer::new(
                id.clone().unwrap_or_else(new_id),
                name,
                email,
                String::new(),
                date::today(),
            );
            apply(&mut c, fields);

            let (cid, cname) = (c.id.clone(), c.name.clone());
            repo.directory.add_customer(c)?;
            repo.save(&mut pool)?;
            ttlog(&pool.conn, "add_customer", &cid, &cname)?;
            success(format!("Customer {cname} added with id {cid}."));
        }

        CustomerAction::Edit { id, fields } => {
            let mut c = repo.directory.customer(id)?.clone();
            apply(&mut c, fields);
            repo.directory.update_customer(c)?;
            repo.save(&mut pool)?;
            ttlog(&pool.conn, "edit_customer", id, "customer updated")?;
            success(format!("Customer {id} updated."));
        }

        CustomerAction::Del { id } => {
            let removed = repo.directory.remove_customer(id)?;
            repo.save(&mut pool)?;
            ttlog(&pool.conn, "del", id, &format!("customer {}", removed.name))?;
            success(format!("Customer {} deleted.", removed.name));
        }

        CustomerAction::List { search } => {
            let found = repo.directory.search_customers(search.as_deref().unwrap_or(""));
            header("Customers");
            if found.is_empty() {
                info("No customers found.");
                return Ok(());
            }

            let mut table = Table::new(["ID", "Name", "Email", "Phone", "Since", "Visits", "Spent", "Advance", "Notes"]);
            for c in found {
                table.add_row(vec![
                    c.id.clone(),
                    c.name.clone(),
                    c.email.clone(),
                    colorize_optional(Some(c.phone.as_str())),
                    c.join_date.format("%b %Y").to_string(),
                    c.total_appointments.to_string(),
                    money(&cfg.currency, c.total_spent),
                    c.advance_balance
                        .map(|a| money(&cfg.currency, a))
                        .unwrap_or_else(|| colorize_optional(None)),
                    colorize_optional(c.notes.as_deref()),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
