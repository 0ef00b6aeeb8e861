//! Shared application state passed to all request handlers.

use std::sync::Arc;

use rollcall_core::storage::AttendanceRepository;

use crate::roster::RosterCache;

#[derive(Clone)]
pub struct AppState {
    /// Roster lookups with the spreadsheet behind the file cache.
    pub roster: Arc<RosterCache>,
    pub attendance: Arc<dyn AttendanceRepository>,
}

impl AppState {
    pub fn new(roster: Arc<RosterCache>, attendance: Arc<dyn AttendanceRepository>) -> Self {
        Self { roster, attendance }
    }
}
