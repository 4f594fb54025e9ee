#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use salonbook::core::directory::Directory;
use salonbook::models::appointment::{Appointment, AppointmentStatus};
use salonbook::models::customer::Customer;
use salonbook::models::service::Service;
use salonbook::models::staff::{StaffMember, WeeklySchedule};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sbk() -> Command {
    cargo_bin_cmd!("salonbook")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_salonbook.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB and register a small salon through the CLI:
/// staff `lisa` and `mike`, service `haircut` (Lisa only, 60 min, 50.00),
/// customers `jane` and `bob`.
pub fn init_salon(db_path: &str) {
    sbk()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (id, name) in [("lisa", "Lisa Wong"), ("mike", "Mike Stevens")] {
        sbk()
            .args([
                "--db", db_path, "staff", "add", "--id", id, "--name", name, "--position",
                "Senior Stylist", "--days", "mon,tue,wed,thu,fri,sat,sun",
            ])
            .assert()
            .success();
    }

    sbk()
        .args([
            "--db", db_path, "service", "add", "--id", "haircut", "--name", "Haircut", "--price",
            "50", "--duration", "60", "--category", "Hair", "--staff", "lisa",
        ])
        .assert()
        .success();

    for (id, name, email) in [
        ("jane", "Jane Doe", "jane@example.com"),
        ("bob", "Bob Smith", "bob@example.com"),
    ] {
        sbk()
            .args([
                "--db", db_path, "customer", "add", "--id", id, "--name", name, "--email", email,
            ])
            .assert()
            .success();
    }
}

/// Book through the CLI as admin and return the new appointment id.
pub fn book(db_path: &str, customer: &str, date: &str, time: &str) -> String {
    let out = sbk()
        .args([
            "--db", db_path, "book", "--customer", customer, "--service", "haircut", "--staff",
            "lisa", "--date", date, "--time", time,
        ])
        .output()
        .expect("run book");
    assert!(out.status.success(), "book failed: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    let start = stdout.find("Appointment ").expect("success line") + "Appointment ".len();
    stdout[start..]
        .split_whitespace()
        .next()
        .expect("appointment id")
        .to_string()
}

/// Same salon as [`init_salon`], built in memory.
pub fn sample_directory() -> Directory {
    let join = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
    let staff = |id: &str, name: &str, services: &[&str]| StaffMember {
        id: id.into(),
        name: name.into(),
        email: format!("{id}@salon.example"),
        phone: String::new(),
        position: "Senior Stylist".into(),
        bio: String::new(),
        service_ids: services.iter().map(|s| s.to_string()).collect(),
        schedule: WeeklySchedule::default(),
        rating: 4.8,
        appointments_completed: 0,
    };

    Directory {
        customers: vec![
            Customer::new("jane".into(), "Jane Doe".into(), "jane@example.com".into(), String::new(), join),
            Customer::new("bob".into(), "Bob Smith".into(), "bob@example.com".into(), String::new(), join),
        ],
        services: vec![
            Service {
                id: "haircut".into(),
                name: "Haircut".into(),
                description: "Cut and style".into(),
                price: 50.0,
                duration: 60,
                category: "Hair".into(),
                staff_ids: vec!["lisa".into()],
            },
            Service {
                id: "facial".into(),
                name: "Facial".into(),
                description: "Deep cleansing".into(),
                price: 80.0,
                duration: 45,
                category: "Skin".into(),
                staff_ids: vec!["mike".into()],
            },
        ],
        staff: vec![
            staff("lisa", "Lisa Wong", &["haircut"]),
            staff("mike", "Mike Stevens", &["facial"]),
        ],
    }
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// Minimal appointment record for store and filter tests.
pub fn appt(
    id: &str,
    customer: (&str, &str),
    staff: (&str, &str),
    date: NaiveDate,
    start: NaiveTime,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id: id.into(),
        customer_id: customer.0.into(),
        customer_name: customer.1.into(),
        service_id: "haircut".into(),
        service_name: "Haircut".into(),
        staff_id: staff.0.into(),
        staff_name: staff.1.into(),
        date,
        start_time: start,
        end_time: salonbook::core::slots::compute_end_time(start, 60),
        status,
        price: 50.0,
    }
}
