mod cache;

pub use cache::RosterCache;
