use chrono::{NaiveDate, NaiveDateTime};
use salonbook::core::payments::{NewPayment, PaymentFilter, PaymentLedger, Period, totals};
use salonbook::errors::AppError;
use salonbook::models::payment::{PaymentMethod, PaymentStatus};

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn payment(customer: &str, service: &str, amount: f64, method: PaymentMethod) -> NewPayment {
    NewPayment {
        appointment_id: None,
        customer_id: None,
        customer_name: customer.into(),
        service_id: None,
        service_name: service.into(),
        amount,
        method,
        reference: None,
    }
}

#[test]
fn test_add_rejects_missing_name_and_bad_amount() {
    let mut ledger = PaymentLedger::default();
    let now = at(2024, 1, 10, 12);

    let err = ledger.add(payment("  ", "Haircut", 50.0, PaymentMethod::Cash), now).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = ledger.add(payment("Jane", "Haircut", 0.0, PaymentMethod::Cash), now).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = ledger
        .add(payment("Jane", "Haircut", f64::INFINITY, PaymentMethod::Card), now)
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = ledger.add(payment("Jane", "Haircut", f64::NAN, PaymentMethod::Card), now).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert!(ledger.all().is_empty());
}

#[test]
fn test_newest_payment_first_and_completed() {
    let mut ledger = PaymentLedger::default();
    ledger.add(payment("Jane", "Haircut", 50.0, PaymentMethod::Cash), at(2024, 1, 9, 10)).unwrap();
    let p = ledger.add(payment("Bob", "Facial", 80.0, PaymentMethod::Card), at(2024, 1, 10, 10)).unwrap();

    assert_eq!(ledger.all()[0].id, p.id);
    assert_eq!(p.status, PaymentStatus::Completed);
}

#[test]
fn test_totals_skip_refunded() {
    let mut ledger = PaymentLedger::default();
    let now = at(2024, 1, 10, 18);

    ledger.add(payment("Jane", "Haircut", 50.0, PaymentMethod::Cash), at(2024, 1, 10, 9)).unwrap();
    ledger.add(payment("Bob", "Facial", 80.0, PaymentMethod::Card), at(2024, 1, 8, 9)).unwrap();
    let refunded = ledger
        .add(payment("Ann", "Color", 120.0, PaymentMethod::Online), at(2024, 1, 10, 11))
        .unwrap();
    assert!(ledger.update_status(&refunded.id, PaymentStatus::Refunded));
    assert!(!ledger.update_status("missing", PaymentStatus::Refunded));

    let rows = ledger.filter(&PaymentFilter::default(), now);
    let t = totals(&rows, now);
    assert_eq!(t.total, 130.0);
    assert_eq!(t.today, 50.0);
    assert_eq!(t.cash, 50.0);
    assert_eq!(t.card, 80.0);
}

#[test]
fn test_filter_by_period_method_and_search() {
    let mut ledger = PaymentLedger::default();
    // 2024-01-10 is a Wednesday; the week starts on Sunday 2024-01-07.
    let now = at(2024, 1, 10, 18);

    ledger.add(payment("Jane", "Haircut", 50.0, PaymentMethod::Cash), at(2024, 1, 10, 9)).unwrap();
    ledger.add(payment("Bob", "Facial", 80.0, PaymentMethod::Card), at(2024, 1, 7, 9)).unwrap();
    ledger.add(payment("Ann", "Color", 120.0, PaymentMethod::Card), at(2024, 1, 6, 9)).unwrap();
    ledger.add(payment("Old", "Color", 10.0, PaymentMethod::Cash), at(2023, 12, 30, 9)).unwrap();

    let count = |f: PaymentFilter| ledger.filter(&f, now).len();

    assert_eq!(count(PaymentFilter { period: Period::Today, ..Default::default() }), 1);
    assert_eq!(count(PaymentFilter { period: Period::Week, ..Default::default() }), 2);
    assert_eq!(count(PaymentFilter { period: Period::Month, ..Default::default() }), 3);
    assert_eq!(
        count(PaymentFilter {
            method: Some(PaymentMethod::Card),
            ..Default::default()
        }),
        2
    );
    assert_eq!(
        count(PaymentFilter {
            search: Some("color".into()),
            period: Period::Month,
            ..Default::default()
        }),
        1
    );
}
