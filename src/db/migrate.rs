use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migrations record themselves there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20261001_0001_create_directory",
        description: "Created customers, services and staff tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS customers (
            id                  TEXT PRIMARY KEY,
            name                TEXT NOT NULL,
            email               TEXT NOT NULL DEFAULT '',
            phone               TEXT NOT NULL DEFAULT '',
            join_date           TEXT NOT NULL,
            total_appointments  INTEGER NOT NULL DEFAULT 0,
            total_spent         REAL NOT NULL DEFAULT 0,
            notes               TEXT,
            preferences         TEXT NOT NULL DEFAULT '[]'
        );

        CREATE TABLE IF NOT EXISTS services (
            id           TEXT PRIMARY KEY,
            name         TEXT NOT NULL,
            description  TEXT NOT NULL DEFAULT '',
            price        REAL NOT NULL,
            duration     INTEGER NOT NULL,
            category     TEXT NOT NULL DEFAULT '',
            staff_ids    TEXT NOT NULL DEFAULT '[]'
        );

        CREATE TABLE IF NOT EXISTS staff (
            id                      TEXT PRIMARY KEY,
            name                    TEXT NOT NULL,
            email                   TEXT NOT NULL DEFAULT '',
            phone                   TEXT NOT NULL DEFAULT '',
            position                TEXT NOT NULL DEFAULT '',
            bio                     TEXT NOT NULL DEFAULT '',
            service_ids             TEXT NOT NULL DEFAULT '[]',
            schedule                TEXT NOT NULL,
            rating                  REAL NOT NULL DEFAULT 0,
            appointments_completed  INTEGER NOT NULL DEFAULT 0
        );
        "#,
    },
    Migration {
        version: "20261001_0002_create_appointments",
        description: "Created appointments table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS appointments (
            seq            INTEGER PRIMARY KEY AUTOINCREMENT,
            id             TEXT NOT NULL,
            customer_id    TEXT NOT NULL,
            customer_name  TEXT NOT NULL,
            service_id     TEXT NOT NULL,
            service_name   TEXT NOT NULL,
            staff_id       TEXT NOT NULL,
            staff_name     TEXT NOT NULL,
            date           TEXT NOT NULL,
            start_time     TEXT NOT NULL,
            end_time       TEXT NOT NULL,
            status         TEXT NOT NULL CHECK(status IN ('scheduled','completed','cancelled')),
            price          REAL NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_appointments_staff_date ON appointments(staff_id, date);
        "#,
    },
    Migration {
        version: "20261001_0003_create_payments",
        description: "Created payments table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS payments (
            seq             INTEGER PRIMARY KEY AUTOINCREMENT,
            id              TEXT NOT NULL,
            appointment_id  TEXT NOT NULL,
            customer_id     TEXT NOT NULL,
            customer_name   TEXT NOT NULL,
            service_id      TEXT NOT NULL,
            service_name    TEXT NOT NULL,
            amount          REAL NOT NULL,
            date            TEXT NOT NULL,
            method          TEXT NOT NULL CHECK(method IN ('cash','card','online')),
            status          TEXT NOT NULL CHECK(status IN ('completed','refunded','failed')),
            reference       TEXT
        );
        "#,
    },
    Migration {
        version: "20261005_0004_add_advance_balance",
        description: "Added advance_balance to customers",
        sql: "ALTER TABLE customers ADD COLUMN advance_balance REAL;",
    },
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations, in order, each once.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        conn.execute_batch(m.sql)?;
        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, 'migration_applied', ?2, ?3)",
            rusqlite::params![chrono::Local::now().to_rfc3339(), m.version, m.description],
        )?;

        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(())
}
