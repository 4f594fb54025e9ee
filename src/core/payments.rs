//! Payment ledger: recording, refunds, filters and revenue totals.

use crate::errors::{AppError, AppResult};
use crate::models::payment::{Payment, PaymentMethod, PaymentStatus};
use crate::utils::id::new_id;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Period {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl Period {
    /// Weeks start on Sunday.
    pub fn contains(&self, date: NaiveDateTime, now: NaiveDateTime) -> bool {
        let (d, today) = (date.date(), now.date());
        match self {
            Period::All => true,
            Period::Today => d == today,
            Period::Week => {
                let start = week_start(today);
                d >= start && d < start + Duration::days(7)
            }
            Period::Month => d.year() == today.year() && d.month() == today.month(),
        }
    }
}

fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_sunday()))
}

#[derive(Debug, Clone, Default)]
pub struct PaymentFilter {
    pub search: Option<String>,
    pub period: Period,
    pub method: Option<PaymentMethod>,
}

impl PaymentFilter {
    pub fn matches(&self, p: &Payment, now: NaiveDateTime) -> bool {
        if let Some(q) = self.search.as_deref().map(str::to_lowercase).filter(|q| !q.is_empty()) {
            let hit = p.customer_name.to_lowercase().contains(&q)
                || p.service_name.to_lowercase().contains(&q)
                || p.reference.as_deref().is_some_and(|r| r.to_lowercase().contains(&q));
            if !hit {
                return false;
            }
        }

        if !self.period.contains(p.date, now) {
            return false;
        }

        self.method.is_none_or(|m| p.method == m)
    }
}

/// Revenue over completed payments only.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RevenueTotals {
    pub total: f64,
    pub today: f64,
    pub cash: f64,
    pub card: f64,
}

/// Input for a manually recorded payment.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub appointment_id: Option<String>,
    pub customer_id: Option<String>,
    pub customer_name: String,
    pub service_id: Option<String>,
    pub service_name: String,
    pub amount: f64,
    pub method: PaymentMethod,
    pub reference: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct PaymentLedger {
    payments: Vec<Payment>,
}

impl PaymentLedger {
    pub fn new(payments: Vec<Payment>) -> Self {
        Self { payments }
    }

    /// Record a completed payment dated `now`; newest payments come first.
    pub fn add(&mut self, new: NewPayment, now: NaiveDateTime) -> AppResult<Payment> {
        if new.customer_name.trim().is_empty() {
            return Err(AppError::Validation("customer name is required".into()));
        }
        if !new.amount.is_finite() || new.amount <= 0.0 {
            return Err(AppError::Validation(format!("invalid amount: {}", new.amount)));
        }

        let payment = Payment {
            id: new_id(),
            appointment_id: new.appointment_id.unwrap_or_else(new_id),
            customer_id: new.customer_id.unwrap_or_else(new_id),
            customer_name: new.customer_name,
            service_id: new.service_id.unwrap_or_else(new_id),
            service_name: new.service_name,
            amount: new.amount,
            date: now,
            method: new.method,
            status: PaymentStatus::Completed,
            reference: new.reference.filter(|r| !r.trim().is_empty()),
        };

        self.payments.insert(0, payment.clone());
        Ok(payment)
    }

    /// Mark a payment completed or refunded. Returns `false` if the id is unknown.
    pub fn update_status(&mut self, id: &str, status: PaymentStatus) -> bool {
        match self.payments.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.status = status;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Payment> {
        self.payments.iter().find(|p| p.id == id)
    }

    pub fn filter(&self, filter: &PaymentFilter, now: NaiveDateTime) -> Vec<&Payment> {
        self.payments.iter().filter(|p| filter.matches(p, now)).collect()
    }

    pub fn all(&self) -> &[Payment] {
        &self.payments
    }
}

pub fn totals(payments: &[&Payment], now: NaiveDateTime) -> RevenueTotals {
    payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Completed)
        .fold(RevenueTotals::default(), |mut acc, p| {
            acc.total += p.amount;
            if p.date.date() == now.date() {
                acc.today += p.amount;
            }
            match p.method {
                PaymentMethod::Cash => acc.cash += p.amount,
                PaymentMethod::Card => acc.card += p.amount,
                PaymentMethod::Online => {}
            }
            acc
        })
}
