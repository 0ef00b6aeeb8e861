mod error;
mod functions;
mod traits;
mod types;

pub use error::AuthError;
pub use functions::{assertion_claims, is_token_expired, token_from_grant, TOKEN_RENEWAL_MARGIN};
pub use traits::{Result, TokenExchange, TokenStore};
pub use types::{
    AccessToken, AssertionClaims, Credential, ServiceAccount, TokenGrant, SPREADSHEETS_READONLY_SCOPE,
};
