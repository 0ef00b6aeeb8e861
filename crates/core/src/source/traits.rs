use async_trait::async_trait;

use crate::auth::Credential;
use crate::roster::RosterEntry;

use super::TransportError;

/// Identifies the rectangular range holding the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRange {
    pub spreadsheet_id: String,
    /// A1 notation, e.g. `Members!A2:A`.
    pub range: String,
}

impl SheetRange {
    pub fn new(spreadsheet_id: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            range: range.into(),
        }
    }
}

/// Authenticated remote read of roster rows.
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Reads the range and reduces each row to its first populated column.
    async fn try_fetch(
        &self,
        credential: &Credential,
        range: &SheetRange,
    ) -> Result<Vec<RosterEntry>, TransportError>;

    /// Like [`try_fetch`](Self::try_fetch), but never fails: a remote error
    /// is logged and read as an empty range.
    async fn fetch(&self, credential: &Credential, range: &SheetRange) -> Vec<RosterEntry> {
        match self.try_fetch(credential, range).await {
            Ok(entries) => entries,
            Err(error) => {
                tracing::error!(
                    spreadsheet_id = %range.spreadsheet_id,
                    range = %range.range,
                    %error,
                    "Failed to retrieve roster range"
                );
                Vec::new()
            }
        }
    }
}
