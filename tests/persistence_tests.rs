mod common;
use common::{appt, hm, sample_directory, ymd};
use salonbook::core::payments::NewPayment;
use salonbook::db::pool::DbPool;
use salonbook::db::repository::Repository;
use salonbook::models::appointment::AppointmentStatus;
use salonbook::models::payment::PaymentMethod;

#[test]
fn test_repository_round_trip() {
    let mut pool = DbPool::in_memory().expect("in-memory db");

    let mut repo = Repository {
        directory: sample_directory(),
        ..Default::default()
    };
    repo.directory.customers[0].preferences = vec!["Short hair".into()];
    repo.directory.customers[0].advance_balance = Some(20.0);
    repo.appointments.add(appt(
        "a1",
        ("jane", "Jane Doe"),
        ("lisa", "Lisa Wong"),
        ymd(2024, 1, 10),
        hm(23, 30),
        AppointmentStatus::Scheduled,
    ));
    repo.payments
        .add(
            NewPayment {
                appointment_id: Some("a1".into()),
                customer_id: Some("jane".into()),
                customer_name: "Jane Doe".into(),
                service_id: Some("haircut".into()),
                service_name: "Haircut".into(),
                amount: 50.0,
                method: PaymentMethod::Card,
                reference: Some("TX-1".into()),
            },
            ymd(2024, 1, 10).and_hms_opt(12, 0, 0).unwrap(),
        )
        .unwrap();

    repo.save(&mut pool).expect("save");
    let loaded = Repository::load(&pool).expect("load");

    assert_eq!(loaded.directory.customers, repo.directory.customers);
    assert_eq!(loaded.directory.services, repo.directory.services);
    assert_eq!(loaded.directory.staff, repo.directory.staff);
    assert_eq!(loaded.appointments.all(), repo.appointments.all());
    assert_eq!(loaded.payments.all(), repo.payments.all());
    assert_eq!(loaded.appointments.get("a1").unwrap().end_time, hm(0, 30));
}

#[test]
fn test_save_replaces_previous_rows() {
    let mut pool = DbPool::in_memory().expect("in-memory db");

    let mut repo = Repository {
        directory: sample_directory(),
        ..Default::default()
    };
    repo.save(&mut pool).unwrap();

    repo.directory.remove_customer("bob").unwrap();
    repo.save(&mut pool).unwrap();

    let loaded = Repository::load(&pool).unwrap();
    assert_eq!(loaded.directory.customers.len(), 1);
    assert_eq!(loaded.directory.customers[0].id, "jane");
}

#[test]
fn test_migrations_are_recorded_once() {
    let pool = DbPool::in_memory().expect("in-memory db");
    salonbook::db::initialize::init_db(&pool.conn).expect("second init is a no-op");

    let applied: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(applied, 4);
}
