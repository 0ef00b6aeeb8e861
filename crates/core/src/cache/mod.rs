mod error;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use serialization::{
    deserialize_snapshot, expiry_after, format_expiry, parse_expiry, serialize_snapshot,
};
pub use traits::CacheStore;
