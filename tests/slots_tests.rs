mod common;
use common::{appt, hm, ymd};
use salonbook::core::slots::{
    MAX_DURATION, check_duration, compute_end_time, crosses_midnight, find_conflicts, free_slots,
    time_slots,
};
use salonbook::models::appointment::AppointmentStatus::{Cancelled, Scheduled};
use salonbook::models::staff::WeeklySchedule;

#[test]
fn test_compute_end_time() {
    assert_eq!(compute_end_time(hm(10, 0), 60), hm(11, 0));
    assert_eq!(compute_end_time(hm(9, 15), 45), hm(10, 0));
    assert_eq!(compute_end_time(hm(23, 30), 60), hm(0, 30));
    assert!(crosses_midnight(hm(23, 30), 60));
    assert!(!crosses_midnight(hm(22, 0), 60));
}

#[test]
fn test_time_slots_half_hourly() {
    let slots = time_slots(hm(9, 0), hm(11, 0), 30);
    assert_eq!(slots, vec![hm(9, 0), hm(9, 30), hm(10, 0), hm(10, 30)]);
    assert!(time_slots(hm(9, 0), hm(11, 0), 0).is_empty());
}

#[test]
fn test_conflicts_ignore_cancelled_and_other_staff() {
    let d = ymd(2024, 1, 10);
    let list = vec![
        appt("a1", ("jane", "Jane"), ("lisa", "Lisa"), d, hm(10, 0), Scheduled),
        appt("a2", ("bob", "Bob"), ("lisa", "Lisa"), d, hm(12, 0), Cancelled),
        appt("a3", ("bob", "Bob"), ("mike", "Mike"), d, hm(14, 0), Scheduled),
    ];

    assert_eq!(find_conflicts(&list, "lisa", d, hm(10, 30), hm(11, 30)).len(), 1);
    assert!(find_conflicts(&list, "lisa", d, hm(11, 0), hm(12, 0)).is_empty());
    assert!(find_conflicts(&list, "lisa", d, hm(12, 0), hm(13, 0)).is_empty());
    assert!(find_conflicts(&list, "lisa", d, hm(14, 0), hm(15, 0)).is_empty());
    assert!(find_conflicts(&list, "lisa", ymd(2024, 1, 11), hm(10, 0), hm(11, 0)).is_empty());
}

#[test]
fn test_free_slots_skip_booked_hour() {
    let d = ymd(2024, 1, 10);
    let list = vec![appt("a1", ("jane", "Jane"), ("lisa", "Lisa"), d, hm(10, 0), Scheduled)];
    let slots = time_slots(hm(9, 0), hm(12, 0), 30);

    let free = free_slots(&list, "lisa", d, &slots, 60);
    assert_eq!(free, vec![hm(9, 0), hm(11, 0), hm(11, 30)]);
}

#[test]
fn test_weekly_schedule_parsing() {
    let s = WeeklySchedule::from_days("mon, wed,sat").expect("valid days");
    assert_eq!(s.describe(), "Mon Wed Sat");
    assert!(WeeklySchedule::from_days("mon,funday").is_none());
    assert_eq!(WeeklySchedule::default().describe(), "Mon Tue Wed Thu Fri");
}

#[test]
fn test_duration_must_fit_in_one_day() {
    assert!(check_duration(1).is_ok());
    assert!(check_duration(MAX_DURATION).is_ok());
    assert!(check_duration(0).is_err());
    assert!(check_duration(24 * 60).is_err());
    assert!(check_duration(u32::MAX).is_err());
}

#[test]
fn test_crosses_midnight_huge_duration_does_not_overflow() {
    assert!(crosses_midnight(hm(10, 0), u32::MAX));
    assert!(crosses_midnight(hm(23, 59), u32::MAX - 100));
}

#[test]
fn test_wrapped_booking_counts_until_midnight() {
    let d = ymd(2024, 1, 10);
    let late = appt("a1", ("jane", "Jane"), ("lisa", "Lisa"), d, hm(23, 30), Scheduled);
    assert_eq!(late.end_time, hm(0, 30));
    let list = vec![late];

    // 23:45-00:45 overlaps 23:30-00:30 before midnight.
    assert_eq!(find_conflicts(&list, "lisa", d, hm(23, 45), hm(0, 45)).len(), 1);
    assert_eq!(find_conflicts(&list, "lisa", d, hm(23, 0), hm(23, 45)).len(), 1);
    // The early-morning part of the same date is not blocked.
    assert!(find_conflicts(&list, "lisa", d, hm(0, 0), hm(0, 30)).is_empty());
    assert!(find_conflicts(&list, "lisa", d, hm(22, 0), hm(23, 30)).is_empty());
}
