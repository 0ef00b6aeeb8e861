//! SQLite schema definitions and SQL query constants.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- One row per person per day
CREATE TABLE IF NOT EXISTS attendance (
    name TEXT NOT NULL,
    date TEXT NOT NULL,
    member INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    PRIMARY KEY (name, date)
);

CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance(date);
"#;

pub const INSERT_ATTENDANCE: &str = r#"
INSERT INTO attendance (name, date, member, created_at)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const DELETE_ATTENDANCE: &str = r#"
DELETE FROM attendance
WHERE name = ?1 AND date = ?2
"#;

pub const SELECT_ATTENDANCE_EXISTS: &str = r#"
SELECT 1
FROM attendance
WHERE name = ?1 AND date = ?2
"#;

pub const SELECT_ATTENDANCE_BY_DATE: &str = r#"
SELECT name, member, date, created_at
FROM attendance
WHERE date = ?1
ORDER BY created_at ASC, rowid ASC
"#;
