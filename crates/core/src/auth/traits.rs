use async_trait::async_trait;

use super::{AccessToken, AuthError, Credential, ServiceAccount};

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Exchanges long-lived service-account key material for an access token.
#[async_trait]
pub trait TokenExchange: Send + Sync {
    async fn exchange(&self, account: &ServiceAccount) -> Result<AccessToken>;
}

/// Produces a credential for reading the roster, persisting it between runs.
///
/// Implementations reuse a stored token when one is available and only
/// perform an exchange when it is absent or unreadable. Nothing is kept in
/// memory between calls.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn authorize(&self) -> Result<Credential>;
}
