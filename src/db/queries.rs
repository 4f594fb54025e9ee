use crate::errors::AppError;
use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::models::customer::Customer;
use crate::models::payment::{Payment, PaymentMethod, PaymentStatus};
use crate::models::service::Service;
use crate::models::staff::{StaffMember, WeeklySchedule};
use crate::utils::time::format_time;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::types::Type;
use rusqlite::{Connection, Result, Row, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

const DATE_FMT: &str = "%Y-%m-%d";
const DATETIME_FMT: &str = "%Y-%m-%dT%H:%M:%S";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

fn get_date(row: &Row, col: &str) -> Result<NaiveDate> {
    let raw: String = row.get(col)?;
    NaiveDate::parse_from_str(&raw, DATE_FMT).map_err(|_| conversion_error(0, AppError::InvalidDate(raw)))
}

fn get_datetime(row: &Row, col: &str) -> Result<NaiveDateTime> {
    let raw: String = row.get(col)?;
    NaiveDateTime::parse_from_str(&raw, DATETIME_FMT)
        .map_err(|_| conversion_error(0, AppError::InvalidDate(raw)))
}

fn get_time(row: &Row, col: &str) -> Result<NaiveTime> {
    let raw: String = row.get(col)?;
    NaiveTime::parse_from_str(&raw, "%H:%M").map_err(|_| conversion_error(0, AppError::InvalidTime(raw)))
}

/// List-like columns are stored as JSON text.
fn get_json<T: DeserializeOwned>(row: &Row, col: &str) -> Result<T> {
    let raw: String = row.get(col)?;
    serde_json::from_str(&raw).map_err(|e| conversion_error(0, AppError::Json(e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

fn collect<T>(rows: impl Iterator<Item = Result<T>>) -> Result<Vec<T>> {
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Customers
// ---------------------------

pub fn map_customer(row: &Row) -> Result<Customer> {
    Ok(Customer {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        join_date: get_date(row, "join_date")?,
        total_appointments: row.get("total_appointments")?,
        total_spent: row.get("total_spent")?,
        notes: row.get("notes")?,
        preferences: get_json(row, "preferences")?,
        advance_balance: row.get("advance_balance")?,
    })
}

pub fn load_customers(conn: &Connection) -> Result<Vec<Customer>> {
    let mut stmt = conn.prepare("SELECT * FROM customers ORDER BY rowid ASC")?;
    let rows = stmt.query_map([], map_customer)?;
    collect(rows)
}

pub fn replace_customers(conn: &Connection, customers: &[Customer]) -> Result<()> {
    conn.execute("DELETE FROM customers", [])?;
    let mut stmt = conn.prepare_cached(
        "INSERT INTO customers (id, name, email, phone, join_date, total_appointments,
                                total_spent, notes, preferences, advance_balance)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
    )?;
    for c in customers {
        stmt.execute(params![
            c.id,
            c.name,
            c.email,
            c.phone,
            c.join_date.format(DATE_FMT).to_string(),
            c.total_appointments,
            c.total_spent,
            c.notes,
            to_json(&c.preferences)?,
            c.advance_balance,
        ])?;
    }
    Ok(())
}

// ---------------------------
// Services
// ---------------------------

pub fn map_service(row: &Row) -> Result<Service> {
    Ok(Service {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        price: row.get("price")?,
        duration: row.get("duration")?,
        category: row.get("category")?,
        staff_ids: get_json(row, "staff_ids")?,
    })
}

pub fn load_services(conn: &Connection) -> Result<Vec<Service>> {
    let mut stmt = conn.prepare("SELECT * FROM services ORDER BY rowid ASC")?;
    let rows = stmt.query_map([], map_service)?;
    collect(rows)
}

pub fn replace_services(conn: &Connection, services: &[Service]) -> Result<()> {
    conn.execute("DELETE FROM services", [])?;
    let mut stmt = conn.prepare_cached(
        "INSERT INTO services (id, name, description, price, duration, category, staff_ids)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;
    for s in services {
        stmt.execute(params![
            s.id,
            s.name,
            s.description,
            s.price,
            s.duration,
            s.category,
            to_json(&s.staff_ids)?,
        ])?;
    }
    Ok(())
}

// ---------------------------
// Staff
// ---------------------------

pub fn map_staff(row: &Row) -> Result<StaffMember> {
    let schedule: WeeklySchedule = get_json(row, "schedule")?;
    Ok(StaffMember {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        position: row.get("position")?,
        bio: row.get("bio")?,
        service_ids: get_json(row, "service_ids")?,
        schedule,
        rating: row.get("rating")?,
        appointments_completed: row.get("appointments_completed")?,
    })
}

pub fn load_staff(conn: &Connection) -> Result<Vec<StaffMember>> {
    let mut stmt = conn.prepare("SELECT * FROM staff ORDER BY rowid ASC")?;
    let rows = stmt.query_map([], map_staff)?;
    collect(rows)
}

pub fn replace_staff(conn: &Connection, staff: &[StaffMember]) -> Result<()> {
    conn.execute("DELETE FROM staff", [])?;
    let mut stmt = conn.prepare_cached(
        "INSERT INTO staff (id, name, email, phone, position, bio, service_ids, schedule,
                            rating, appointments_completed)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
    )?;
    for m in staff {
        stmt.execute(params![
            m.id,
            m.name,
            m.email,
            m.phone,
            m.position,
            m.bio,
            to_json(&m.service_ids)?,
            to_json(&m.schedule)?,
            m.rating,
            m.appointments_completed,
        ])?;
    }
    Ok(())
}

// ---------------------------
// Appointments
// ---------------------------

pub fn map_appointment(row: &Row) -> Result<Appointment> {
    let status_str: String = row.get("status")?;
    let status = AppointmentStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(0, AppError::InvalidStatus(status_str.clone())))?;

    Ok(Appointment {
        id: row.get("id")?,
        customer_id: row.get("customer_id")?,
        customer_name: row.get("customer_name")?,
        service_id: row.get("service_id")?,
        service_name: row.get("service_name")?,
        staff_id: row.get("staff_id")?,
        staff_name: row.get("staff_name")?,
        date: get_date(row, "date")?,
        start_time: get_time(row, "start_time")?,
        end_time: get_time(row, "end_time")?,
        status,
        price: row.get("price")?,
    })
}

/// Appointments in insertion order.
pub fn load_appointments(conn: &Connection) -> Result<Vec<Appointment>> {
    let mut stmt = conn.prepare("SELECT * FROM appointments ORDER BY seq ASC")?;
    let rows = stmt.query_map([], map_appointment)?;
    collect(rows)
}

pub fn replace_appointments(conn: &Connection, appointments: &[Appointment]) -> Result<()> {
    conn.execute("DELETE FROM appointments", [])?;
    let mut stmt = conn.prepare_cached(
        "INSERT INTO appointments (id, customer_id, customer_name, service_id, service_name,
                                   staff_id, staff_name, date, start_time, end_time, status, price)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
    )?;
    for a in appointments {
        stmt.execute(params![
            a.id,
            a.customer_id,
            a.customer_name,
            a.service_id,
            a.service_name,
            a.staff_id,
            a.staff_name,
            a.date.format(DATE_FMT).to_string(),
            format_time(a.start_time),
            format_time(a.end_time),
            a.status.to_db_str(),
            a.price,
        ])?;
    }
    Ok(())
}

// ---------------------------
// Payments
// ---------------------------

pub fn map_payment(row: &Row) -> Result<Payment> {
    let method_str: String = row.get("method")?;
    let method = PaymentMethod::from_db_str(&method_str)
        .ok_or_else(|| conversion_error(0, AppError::InvalidMethod(method_str.clone())))?;
    let status_str: String = row.get("status")?;
    let status = PaymentStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(0, AppError::InvalidStatus(status_str.clone())))?;

    Ok(Payment {
        id: row.get("id")?,
        appointment_id: row.get("appointment_id")?,
        customer_id: row.get("customer_id")?,
        customer_name: row.get("customer_name")?,
        service_id: row.get("service_id")?,
        service_name: row.get("service_name")?,
        amount: row.get("amount")?,
        date: get_datetime(row, "date")?,
        method,
        status,
        reference: row.get("reference")?,
    })
}

/// Payments in ledger order (newest first, as stored).
pub fn load_payments(conn: &Connection) -> Result<Vec<Payment>> {
    let mut stmt = conn.prepare("SELECT * FROM payments ORDER BY seq ASC")?;
    let rows = stmt.query_map([], map_payment)?;
    collect(rows)
}

pub fn replace_payments(conn: &Connection, payments: &[Payment]) -> Result<()> {
    conn.execute("DELETE FROM payments", [])?;
    let mut stmt = conn.prepare_cached(
        "INSERT INTO payments (id, appointment_id, customer_id, customer_name, service_id,
                               service_name, amount, date, method, status, reference)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
    )?;
    for p in payments {
        stmt.execute(params![
            p.id,
            p.appointment_id,
            p.customer_id,
            p.customer_name,
            p.service_id,
            p.service_name,
            p.amount,
            p.date.format(DATETIME_FMT).to_string(),
            p.method.to_db_str(),
            p.status.to_db_str(),
            p.reference,
        ])?;
    }
    Ok(())
}
