mod error;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use traits::AttendanceRepository;
pub use types::AttendanceRecord;
