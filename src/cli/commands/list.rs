use crate::cli::commands::open_repository;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::{AppointmentQuery, is_visible};
use crate::errors::{AppError, AppResult};
use crate::export::range::parse_range;
use crate::models::appointment::Appointment;
use crate::models::role::Caller;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, color_for_status, paint};
use crate::utils::date;
use crate::utils::formatting::{bold, money};
use crate::utils::table::Table;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, caller: &Caller) -> AppResult<()> {
    match cmd {
        Commands::List {
            search,
            status,
            range,
            week,
        } => {
            let (_pool, repo) = open_repository(cfg)?;

            let mut query = AppointmentQuery::for_caller(caller.clone()).category(*status);
            if let Some(s) = search {
                query = query.search(s.clone());
            }

            let week = match week {
                Some(s) => {
                    let d = date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?;
                    Some(date::week_bounds(d))
                }
                None => None,
            };
            let bounds = match week {
                Some(w) => Some(w),
                None => range.as_deref().map(parse_range).transpose()?,
            };
            let today = date::today();

            let rows: Vec<&Appointment> = repo
                .appointments
                .query(&query, date::now())
                .into_iter()
                .filter(|a| bounds.is_none_or(|(from, to)| a.date >= from && a.date <= to))
                .collect();

            let title = if caller.is_customer() {
                "My Appointments"
            } else {
                "Appointments"
            };
            header(title);

            if rows.is_empty() {
                info("No appointments found. Try changing your filters.");
                return Ok(());
            }

            match week {
                Some((monday, _)) => print_week(&rows, monday, caller, cfg, today),
                None => print!("{}", render_table(&rows, caller, cfg, today)),
            }
            println!(
                "{} {}",
                rows.len(),
                if rows.len() == 1 { "appointment" } else { "appointments" }
            );
        }

        Commands::Show { id } => {
            let (_pool, repo) = open_repository(cfg)?;

            let appt = repo
                .appointments
                .get(id)
                .filter(|a| is_visible(caller, a))
                .ok_or_else(|| AppError::not_found("Appointment", id.as_str()))?;

            print_details(appt, cfg);
        }

        _ => {}
    }

    Ok(())
}

fn render_table(rows: &[&Appointment], caller: &Caller, cfg: &Config, today: NaiveDate) -> String {
    let mut headers = vec!["ID"];
    if !caller.is_customer() {
        headers.push("Customer");
    }
    headers.extend(["Service", "Staff", "Date", "Time", "Status", "Price"]);

    let mut table = Table::new(headers);
    for a in rows {
        let mut row = vec![a.id.clone()];
        if !caller.is_customer() {
            row.push(a.customer_name.clone());
        }

        let date = if a.date == today {
            format!("{} (today)", a.date.format("%b %-d, %Y"))
        } else {
            a.date.format("%b %-d, %Y").to_string()
        };

        row.extend([
            a.service_name.clone(),
            a.staff_name.clone(),
            date,
            format!("{} - {}", a.start_str(), a.end_str()),
            paint(color_for_status(a.status), a.status.to_db_str()),
            money(&cfg.currency, a.price),
        ]);
        table.add_row(row);
    }
    table.render()
}

/// One block per day, Monday first; empty days are listed too.
fn print_week(rows: &[&Appointment], monday: NaiveDate, caller: &Caller, cfg: &Config, today: NaiveDate) {
    for day in monday.iter_days().take(7) {
        let mut on_day: Vec<&Appointment> = rows.iter().copied().filter(|a| a.date == day).collect();
        on_day.sort_by_key(|a| a.start_time);

        println!("{}", bold(&day.format("%a %b %-d").to_string()));
        if on_day.is_empty() {
            println!("  {}", paint(GREY, "no appointments"));
        } else {
            print!("{}", render_table(&on_day, caller, cfg, today));
        }
    }
}

fn print_details(a: &Appointment, cfg: &Config) {
    header(format!("Appointment {}", a.id));
    println!("{} {}", bold("Customer:"), a.customer_name);
    println!("{} {}", bold("Service: "), a.service_name);
    println!("{} {}", bold("Staff:   "), a.staff_name);
    println!("{} {}", bold("Date:    "), a.date.format("%A, %B %-d, %Y"));
    println!("{} {} - {}", bold("Time:    "), a.start_str(), a.end_str());
    println!(
        "{} {}",
        bold("Status:  "),
        paint(color_for_status(a.status), a.status.to_db_str())
    );
    println!("{} {}", bold("Price:   "), money(&cfg.currency, a.price));
}
