//! Storage backend implementations of the repository traits in
//! `rollcall_core::storage`.

pub mod sqlite;

pub use sqlite::SqliteAttendanceRepository;
