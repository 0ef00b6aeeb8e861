//! SQLite repository implementation.
//!
//! Implements `AttendanceRepository` from `rollcall_core::storage` using SQLite.

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::params;
use tokio_rusqlite::Connection;

use rollcall_core::storage::{AttendanceRecord, AttendanceRepository, RepositoryError, Result};

use super::conversions::{format_date, format_datetime, row_to_attendance};
use super::error::map_tokio_rusqlite_error;
use super::schema;

const ENTITY: &str = "Attendance";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

fn attendance_key(name: &str, date: &NaiveDate) -> String {
    format!("{}@{}", name, format_date(date))
}

/// SQLite-based attendance repository.
pub struct SqliteAttendanceRepository {
    conn: Connection,
}

impl SqliteAttendanceRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl AttendanceRepository for SqliteAttendanceRepository {
    async fn add_attendance(&self, record: &AttendanceRecord) -> Result<()> {
        let name = record.name.clone();
        let date = format_date(&record.date);
        let member = record.member;
        let created_at = format_datetime(&record.created_at);

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_ATTENDANCE,
                    params![name, date, member, created_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, record.key()))
    }

    async fn remove_attendance(&self, name: &str, date: NaiveDate) -> Result<bool> {
        let key = attendance_key(name, &date);
        let name = name.to_string();
        let date = format_date(&date);

        self.conn
            .call(move |conn| {
                let removed = conn
                    .execute(schema::DELETE_ATTENDANCE, params![name, date])
                    .map_err(wrap_err)?;
                Ok(removed > 0)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, key))
    }

    async fn is_attending(&self, name: &str, date: NaiveDate) -> Result<bool> {
        let key = attendance_key(name, &date);
        let name = name.to_string();
        let date = format_date(&date);

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ATTENDANCE_EXISTS)
                    .map_err(wrap_err)?;
                stmt.exists(params![name, date]).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, key))
    }

    async fn get_attending(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>> {
        let date_str = format_date(&date);

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ATTENDANCE_BY_DATE)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([&date_str], row_to_attendance)
                    .map_err(wrap_err)?;

                let mut records = Vec::new();
                for row_result in rows {
                    records.push(row_result.map_err(wrap_err)?);
                }
                Ok(records)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, format_date(&date)))
    }
}
