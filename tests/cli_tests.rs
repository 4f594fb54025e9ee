use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{book, init_salon, sbk, setup_test_db};

#[test]
fn test_init_and_log() {
    let db_path = setup_test_db("cli_init_log");

    sbk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    sbk()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied").and(contains("init")));
}

#[test]
fn test_book_and_list() {
    let db_path = setup_test_db("cli_book_list");
    init_salon(&db_path);

    sbk()
        .args([
            "--db", &db_path, "book", "--customer", "jane", "--service", "haircut", "--staff",
            "lisa", "--date", "2030-01-10", "--time", "10:00",
        ])
        .assert()
        .success()
        .stdout(contains("10:00-11:00").and(contains("Lisa Wong")).and(contains("$50.00")));

    sbk()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Jane Doe").and(contains("1 appointment")));
}

#[test]
fn test_book_missing_field_fails() {
    let db_path = setup_test_db("cli_book_missing");
    init_salon(&db_path);

    sbk()
        .args([
            "--db", &db_path, "book", "--customer", "jane", "--service", "haircut", "--date",
            "2030-01-10", "--time", "10:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Please select a staff member"));
}

#[test]
fn test_book_unqualified_staff_fails() {
    let db_path = setup_test_db("cli_book_unqualified");
    init_salon(&db_path);

    sbk()
        .args([
            "--db", &db_path, "book", "--customer", "jane", "--service", "haircut", "--staff",
            "mike", "--date", "2030-01-10", "--time", "10:00",
        ])
        .assert()
        .failure()
        .stderr(contains("does not perform"));
}

#[test]
fn test_customer_sees_only_own_appointments() {
    let db_path = setup_test_db("cli_customer_view");
    init_salon(&db_path);
    book(&db_path, "jane", "2030-01-10", "10:00");
    book(&db_path, "bob", "2030-01-10", "12:00");

    sbk()
        .args(["--db", &db_path, "--role", "customer", "--user", "jane", "list"])
        .assert()
        .success()
        .stdout(
            contains("My Appointments")
                .and(contains("10:00 - 11:00"))
                .and(contains("12:00 - 13:00").not()),
        );
}

#[test]
fn test_customer_books_for_self() {
    let db_path = setup_test_db("cli_customer_books");
    init_salon(&db_path);

    sbk()
        .args([
            "--db", &db_path, "--role", "customer", "--user", "bob", "book", "--customer", "jane",
            "--service", "haircut", "--staff", "lisa", "--date", "2030-01-10", "--time", "10:00",
        ])
        .assert()
        .success()
        .stdout(contains("booked for Bob Smith"));
}

#[test]
fn test_role_without_user_fails() {
    let db_path = setup_test_db("cli_role_no_user");
    init_salon(&db_path);

    sbk()
        .args(["--db", &db_path, "--role", "staff", "list"])
        .assert()
        .failure()
        .stderr(contains("--user is required"));
}

#[test]
fn test_status_update_and_filter() {
    let db_path = setup_test_db("cli_status");
    init_salon(&db_path);
    let first = book(&db_path, "jane", "2030-01-10", "10:00");
    book(&db_path, "bob", "2030-01-11", "10:00");

    sbk()
        .args(["--db", &db_path, "status", &first, "completed"])
        .assert()
        .success()
        .stdout(contains("marked as completed"));

    sbk()
        .args(["--db", &db_path, "list", "--status", "completed"])
        .assert()
        .success()
        .stdout(contains("Jane Doe").and(contains("Bob Smith").not()));

    sbk()
        .args(["--db", &db_path, "list", "--status", "upcoming"])
        .assert()
        .success()
        .stdout(contains("Bob Smith").and(contains("Jane Doe").not()));
}

#[test]
fn test_status_unknown_id() {
    let db_path = setup_test_db("cli_status_unknown");
    init_salon(&db_path);

    sbk()
        .args(["--db", &db_path, "status", "nope1234", "cancelled"])
        .assert()
        .failure()
        .stderr(contains("Appointment not found: nope1234"));
}

#[test]
fn test_status_permissions() {
    let db_path = setup_test_db("cli_status_perm");
    init_salon(&db_path);
    let id = book(&db_path, "jane", "2030-01-10", "10:00");

    // Mike does not own the appointment.
    sbk()
        .args([
            "--db", &db_path, "--role", "staff", "--user", "mike", "status", &id, "completed",
        ])
        .assert()
        .failure()
        .stderr(contains("Permission denied"));

    // A customer cannot complete, only cancel.
    sbk()
        .args([
            "--db", &db_path, "--role", "customer", "--user", "jane", "status", &id, "completed",
        ])
        .assert()
        .failure();

    sbk()
        .args([
            "--db", &db_path, "--role", "customer", "--user", "jane", "status", &id, "cancelled",
        ])
        .assert()
        .success();

    sbk()
        .args([
            "--db", &db_path, "--role", "staff", "--user", "lisa", "status", &id, "scheduled",
        ])
        .assert()
        .success();
}

#[test]
fn test_search_filter() {
    let db_path = setup_test_db("cli_search");
    init_salon(&db_path);
    book(&db_path, "jane", "2030-01-10", "10:00");
    book(&db_path, "bob", "2030-01-11", "10:00");

    sbk()
        .args(["--db", &db_path, "list", "--search", "BOB"])
        .assert()
        .success()
        .stdout(contains("Bob Smith").and(contains("Jane Doe").not()));

    sbk()
        .args(["--db", &db_path, "list", "--search", "nothing-like-this"])
        .assert()
        .success()
        .stdout(contains("No appointments found"));
}

#[test]
fn test_slots_skip_booked_time() {
    let db_path = setup_test_db("cli_slots");
    init_salon(&db_path);
    book(&db_path, "jane", "2030-01-10", "10:00");

    sbk()
        .args(["--db", &db_path, "slots", "--service", "haircut", "--date", "2030-01-10"])
        .assert()
        .success()
        .stdout(
            contains("Lisa Wong")
                .and(contains("09:00-10:00"))
                .and(contains("11:00-12:00"))
                .and(contains("10:00-11:00").not()),
        );
}

#[test]
fn test_directory_management() {
    let db_path = setup_test_db("cli_directory");
    init_salon(&db_path);

    sbk()
        .args(["--db", &db_path, "customer", "edit", "jane", "--phone", "555-0101", "--advance", "25"])
        .assert()
        .success();

    sbk()
        .args(["--db", &db_path, "customer", "list", "--search", "555-01"])
        .assert()
        .success()
        .stdout(contains("Jane Doe").and(contains("$25.00")).and(contains("Bob Smith").not()));

    sbk()
        .args(["--db", &db_path, "staff", "schedule", "mike", "--days", "sat,sun"])
        .assert()
        .success()
        .stdout(contains("Sat Sun"));

    sbk()
        .args(["--db", &db_path, "service", "edit", "haircut", "--staff", "lisa,mike"])
        .assert()
        .success();

    sbk()
        .args(["--db", &db_path, "staff", "list"])
        .assert()
        .success()
        .stdout(contains("Mike Stevens").and(contains("Haircut")));

    sbk()
        .args(["--db", &db_path, "staff", "del", "mike"])
        .assert()
        .success();

    sbk()
        .args(["--db", &db_path, "service", "list"])
        .assert()
        .success()
        .stdout(contains("Haircut").and(contains("Mike Stevens").not()));

    sbk()
        .args(["--db", &db_path, "customer", "del", "nobody"])
        .assert()
        .failure()
        .stderr(contains("Customer not found"));
}

#[test]
fn test_directory_requires_admin() {
    let db_path = setup_test_db("cli_directory_perm");
    init_salon(&db_path);

    sbk()
        .args(["--db", &db_path, "--role", "staff", "--user", "lisa", "customer", "list"])
        .assert()
        .failure()
        .stderr(contains("Permission denied"));

    sbk()
        .args(["--db", &db_path, "--role", "staff", "--user", "lisa", "service", "list"])
        .assert()
        .success()
        .stdout(contains("Haircut"));
}

#[test]
fn test_payments_flow() {
    let db_path = setup_test_db("cli_payments");
    init_salon(&db_path);
    let appt = book(&db_path, "jane", "2030-01-10", "10:00");

    sbk()
        .args(["--db", &db_path, "payment", "add", "--appointment", &appt, "--amount", "50", "--method", "card"])
        .assert()
        .success()
        .stdout(contains("recorded for Jane Doe"));

    let out = sbk()
        .args([
            "--db", &db_path, "payment", "add", "--customer-name", "Walk In", "--service-name",
            "Trim", "--amount", "20",
        ])
        .output()
        .expect("run payment add");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let start = stdout.find("Payment ").unwrap() + "Payment ".len();
    let cash_id = stdout[start..].split_whitespace().next().unwrap().to_string();

    sbk()
        .args(["--db", &db_path, "payment", "list"])
        .assert()
        .success()
        .stdout(contains("Total: $70.00").and(contains("Cash: $20.00")).and(contains("Card: $50.00")));

    sbk()
        .args(["--db", &db_path, "payment", "refund", &cash_id])
        .assert()
        .success();

    sbk()
        .args(["--db", &db_path, "payment", "list", "--method", "cash"])
        .assert()
        .success()
        .stdout(contains("refunded").and(contains("Total: $0.00")));

    sbk()
        .args(["--db", &db_path, "payment", "add", "--service-name", "Trim", "--amount", "20"])
        .assert()
        .failure()
        .stderr(contains("customer name is required"));
}

#[test]
fn test_dashboard_counts() {
    let db_path = setup_test_db("cli_dashboard");
    init_salon(&db_path);
    book(&db_path, "jane", "2030-01-10", "10:00");
    book(&db_path, "bob", "2030-01-11", "10:00");

    sbk()
        .args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Upcoming:").and(contains("$100.00")));

    sbk()
        .args(["--db", &db_path, "--role", "customer", "--user", "jane", "dashboard"])
        .assert()
        .failure();
}

#[test]
fn test_show_hidden_from_other_customer() {
    let db_path = setup_test_db("cli_show");
    init_salon(&db_path);
    let id = book(&db_path, "jane", "2030-01-10", "10:00");

    sbk()
        .args(["--db", &db_path, "show", &id])
        .assert()
        .success()
        .stdout(contains("Haircut").and(contains("Thursday, January 10, 2030")));

    sbk()
        .args(["--db", &db_path, "--role", "customer", "--user", "bob", "show", &id])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_service_duration_and_price_limits() {
    let db_path = setup_test_db("cli_service_limits");
    init_salon(&db_path);

    for duration in ["1440", "4294967295", "0"] {
        sbk()
            .args(["--db", &db_path, "service", "edit", "haircut", "--duration", duration])
            .assert()
            .failure()
            .stderr(contains("duration must be between 1 and 1439"));
    }

    sbk()
        .args(["--db", &db_path, "service", "edit", "haircut", "--duration", "1439"])
        .assert()
        .success();

    sbk()
        .args([
            "--db", &db_path, "service", "add", "--name", "Gold", "--price", "inf",
        ])
        .assert()
        .failure()
        .stderr(contains("invalid price"));
}

#[test]
fn test_list_week_groups_by_day() {
    let db_path = setup_test_db("cli_list_week");
    init_salon(&db_path);
    // 2030-01-07 is a Monday.
    book(&db_path, "jane", "2030-01-09", "10:00");
    book(&db_path, "bob", "2030-01-13", "14:00");
    book(&db_path, "bob", "2030-01-14", "09:00");

    sbk()
        .args(["--db", &db_path, "list", "--week", "2030-01-10"])
        .assert()
        .success()
        .stdout(
            contains("Mon Jan 7")
                .and(contains("Wed Jan 9"))
                .and(contains("Sun Jan 13"))
                .and(contains("no appointments"))
                .and(contains("2 appointments"))
                .and(contains("Jan 14").not()),
        );

    sbk()
        .args(["--db", &db_path, "list", "--week", "2030-01-10", "--range", "2030"])
        .assert()
        .failure();
}
