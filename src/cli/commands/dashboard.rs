use crate::cli::commands::open_repository;
use crate::config::Config;
use crate::core::access::require_admin_or_staff;
use crate::core::dashboard::DashboardLogic;
use crate::errors::AppResult;
use crate::models::role::Caller;
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::formatting::{bold, money};

pub fn handle(cfg: &Config, caller: &Caller) -> AppResult<()> {
    require_admin_or_staff(caller, "view the dashboard")?;

    let (_pool, repo) = open_repository(cfg)?;
    let now = date::now();

    let stats = DashboardLogic::build(
        caller,
        repo.appointments.all(),
        repo.directory.customers.len(),
        repo.directory.staff.len(),
        now,
    );

    header(format!("Dashboard, {}", now.format("%A, %B %-d, %Y")));
    println!("{} {}", bold("Today's appointments:"), stats.today_appointments);
    println!("{} {}", bold("Upcoming:            "), stats.upcoming_appointments);
    println!("{} {}", bold("Revenue:             "), money(&cfg.currency, stats.revenue));
    println!("{} {}", bold("Customers:           "), stats.customers);
    println!("{} {}", bold("Staff:               "), stats.staff);

    Ok(())
}
