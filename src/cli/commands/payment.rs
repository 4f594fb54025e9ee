use crate::cli::commands::open_repository;
use crate::cli::parser::{Commands, PaymentAction};
use crate::config::Config;
use crate::core::access::require_admin;
use crate::core::payments::{NewPayment, PaymentFilter, totals};
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::payment::PaymentStatus;
use crate::models::role::Caller;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{color_for_payment, colorize_optional, paint};
use crate::utils::date;
use crate::utils::formatting::money;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config, caller: &Caller) -> AppResult<()> {
    let Commands::Payment { action } = cmd else {
        return Ok(());
    };
    require_admin(caller, "manage payments")?;

    let (mut pool, mut repo) = open_repository(cfg)?;
    let now = date::now();

    match action {
        PaymentAction::Add {
            customer_name,
            service_name,
            amount,
            method,
            reference,
            appointment,
        } => {
            let new = match appointment {
                Some(appt_id) => {
                    let a = repo
                        .appointments
                        .get(appt_id)
                        .ok_or_else(|| AppError::not_found("Appointment", appt_id.as_str()))?;
                    NewPayment {
                        appointment_id: Some(a.id.clone()),
                        customer_id: Some(a.customer_id.clone()),
                        customer_name: customer_name.clone().unwrap_or_else(|| a.customer_name.clone()),
                        service_id: Some(a.service_id.clone()),
                        service_name: service_name.clone().unwrap_or_else(|| a.service_name.clone()),
                        amount: *amount,
                        method: *method,
                        reference: reference.clone(),
                    }
                }
                None => NewPayment {
                    appointment_id: None,
                    customer_id: None,
                    customer_name: customer_name.clone().unwrap_or_default(),
                    service_id: None,
                    service_name: service_name.clone().unwrap_or_default(),
                    amount: *amount,
                    method: *method,
                    reference: reference.clone(),
                },
            };

            let p = repo.payments.add(new, now)?;
            repo.save(&mut pool)?;
            ttlog(
                &pool.conn,
                "payment",
                &p.id,
                &format!("{} {} ({})", p.customer_name, money(&cfg.currency, p.amount), p.method.to_db_str()),
            )?;
            success(format!(
                "Payment {} of {} recorded for {}.",
                p.id,
                money(&cfg.currency, p.amount),
                p.customer_name
            ));
        }

        PaymentAction::Refund { id } => {
            if !repo.payments.update_status(id, PaymentStatus::Refunded) {
                return Err(AppError::not_found("Payment", id.as_str()));
            }
            repo.save(&mut pool)?;
            ttlog(&pool.conn, "refund", id, "payment refunded")?;
            success(format!("Payment {id} refunded."));
        }

        PaymentAction::Process { id } => {
            if !repo.payments.update_status(id, PaymentStatus::Completed) {
                return Err(AppError::not_found("Payment", id.as_str()));
            }
            repo.save(&mut pool)?;
            ttlog(&pool.conn, "payment", id, "payment processed")?;
            success(format!("Payment {id} processed."));
        }

        PaymentAction::List {
            search,
            period,
            method,
        } => {
            let filter = PaymentFilter {
                search: search.clone(),
                period: *period,
                method: *method,
            };
            let rows = repo.payments.filter(&filter, now);

            header("Payments");
            if rows.is_empty() {
                info("No payments found.");
                return Ok(());
            }

            let mut table = Table::new(["ID", "Date", "Customer", "Service", "Method", "Status", "Amount", "Reference"]);
            for p in &rows {
                table.add_row(vec![
                    p.id.clone(),
                    p.date.format("%Y-%m-%d %H:%M").to_string(),
                    p.customer_name.clone(),
                    p.service_name.clone(),
                    p.method.to_db_str().to_string(),
                    paint(color_for_payment(p.status), p.status.to_db_str()),
                    money(&cfg.currency, p.amount),
                    colorize_optional(p.reference.as_deref()),
                ]);
            }
            print!("{}", table.render());

            let t = totals(&rows, now);
            println!(
                "Total: {}  Today: {}  Cash: {}  Card: {}",
                money(&cfg.currency, t.total),
                money(&cfg.currency, t.today),
                money(&cfg.currency, t.cash),
                money(&cfg.currency, t.card)
            );
        }
    }

    Ok(())
}
