mod error;
mod traits;

pub use error::TransportError;
pub use traits::{RosterSource, SheetRange};
