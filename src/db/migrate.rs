use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Applied migrations are recorded there.
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

/// Versioned schema steps, applied in order, each exactly once.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20250301_0001_attendance",
        "Created attendance table",
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            ordinal   INTEGER NOT NULL,
            date      TEXT NOT NULL,
            status    TEXT NOT NULL,
            in_time   TEXT,
            out_time  TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance(date);
        "#,
    ),
    (
        "20250301_0002_routines",
        "Created routines and routine_details tables",
        r#"
        CREATE TABLE IF NOT EXISTS routines (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            api_id             INTEGER NOT NULL,
            ordinal            INTEGER NOT NULL,
            class_id           INTEGER,
            section_id         INTEGER,
            class_name         TEXT,
            section_name       TEXT,
            number_of_periods  INTEGER NOT NULL DEFAULT 0,
            off_day            TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS routine_details (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            routine_id     INTEGER NOT NULL REFERENCES routines(id) ON DELETE CASCADE,
            ordinal        INTEGER NOT NULL,
            day_name       TEXT,
            period_number  INTEGER,
            subject        TEXT,
            teacher        TEXT,
            time           TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_details_routine ON routine_details(routine_id, ordinal);
        "#,
    ),
    (
        "20250301_0003_profile",
        "Created profile table",
        r#"
        CREATE TABLE IF NOT EXISTS profile (
            id                     INTEGER PRIMARY KEY CHECK(id = 1),
            student_id             INTEGER NOT NULL,
            name                   TEXT,
            admission_date         TEXT,
            class_wise_student_id  INTEGER,
            class_id               INTEGER,
            section_id             INTEGER,
            class_name             TEXT,
            section_name           TEXT
        );
        "#,
    ),
    (
        "20250412_0004_session",
        "Created session key/value table",
        r#"
        CREATE TABLE IF NOT EXISTS session (
            key         TEXT PRIMARY KEY,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        "#,
    ),
    (
        "20250520_0005_directory",
        "Created subjects, staff and fee_summary tables",
        r#"
        CREATE TABLE IF NOT EXISTS subjects (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            api_id        INTEGER NOT NULL,
            ordinal       INTEGER NOT NULL,
            name          TEXT NOT NULL,
            code          TEXT,
            order_number  INTEGER NOT NULL,
            active        INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS subject_assignments (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            ordinal     INTEGER NOT NULL,
            assign_id   INTEGER NOT NULL,
            class_id    INTEGER,
            section_id  INTEGER,
            subject_id  INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS staff (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            api_id          INTEGER NOT NULL,
            ordinal         INTEGER NOT NULL,
            first_name      TEXT NOT NULL,
            last_name       TEXT,
            designation_id  INTEGER,
            phone           TEXT,
            email           TEXT,
            qualification   TEXT,
            joining_date    TEXT,
            is_teacher      INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS designations (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            api_id   INTEGER NOT NULL,
            ordinal  INTEGER NOT NULL,
            name     TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS fee_summary (
            id            INTEGER PRIMARY KEY CHECK(id = 1),
            total_amount  REAL NOT NULL,
            total_paid    REAL NOT NULL,
            total_due     REAL NOT NULL
        );
        "#,
    ),
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Bring the schema up to date. Called by `DbPool::open`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, description, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [*version, *description],
        )?;
        tx.commit()?;

        success(format!("Migration applied: {version} → {description}"));
    }

    Ok(())
}

/// Versions recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}
