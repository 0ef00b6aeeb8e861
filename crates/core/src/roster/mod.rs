mod functions;
mod types;

pub use functions::{first_column, is_expired};
pub use types::{EmptyReason, RosterEntry, RosterOutcome, RosterResponse, RosterSnapshot};
