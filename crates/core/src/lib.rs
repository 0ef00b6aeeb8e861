//! Functional core for rollcall.
//!
//! Pure types, traits and functions shared by the remote adapters
//! (`rollcall_sheets`) and the web server (`rollcall`). Nothing in this
//! crate performs network or disk I/O.

pub mod auth;
pub mod cache;
pub mod clock;
pub mod config;
pub mod roster;
pub mod serde;
pub mod source;
pub mod storage;
