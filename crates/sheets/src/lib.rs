//! Google Sheets adapters for rollcall.
//!
//! This crate provides:
//! - `JwtBearerExchange`: service-account JWT grant against the token endpoint
//! - `FileTokenStore`: a `TokenStore` that persists the token to `token.json`
//! - `GoogleSheetsSource`: a `RosterSource` over the spreadsheet values API

mod config;
mod exchange;
mod source;
mod token_store;

pub use config::{SheetsConfig, DEFAULT_SHEETS_API_BASE, DEFAULT_TOKEN_URI};
pub use exchange::JwtBearerExchange;
pub use source::GoogleSheetsSource;
pub use token_store::{FileTokenStore, TOKEN_FILE};
