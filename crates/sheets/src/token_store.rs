//! File-backed token store.
//!
//! The token is written once to `<token_dir>/token.json` after a successful
//! exchange and read back on every later call. Deleting the file forces a
//! new exchange.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use rollcall_core::auth::{AccessToken, Credential, Result, ServiceAccount, TokenExchange, TokenStore};

/// File name of the persisted token inside the token directory.
pub const TOKEN_FILE: &str = "token.json";

pub struct FileTokenStore {
    account: ServiceAccount,
    token_dir: PathBuf,
    exchange: Arc<dyn TokenExchange>,
}

impl FileTokenStore {
    pub fn new(
        account: ServiceAccount,
        token_dir: impl Into<PathBuf>,
        exchange: Arc<dyn TokenExchange>,
    ) -> Self {
        Self {
            account,
            token_dir: token_dir.into(),
            exchange,
        }
    }

    pub fn token_path(&self) -> PathBuf {
        self.token_dir.join(TOKEN_FILE)
    }

    /// Reads the persisted token. `None` when missing or unparseable.
    async fn load_token(&self, path: &Path) -> Option<AccessToken> {
        let contents = match tokio::fs::read(path).await {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "No stored token");
                return None;
            }
        };

        match serde_json::from_slice(&contents) {
            Ok(token) => Some(token),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Stored token is unreadable");
                None
            }
        }
    }

    async fn save_token(&self, path: &Path, token: &AccessToken) -> std::io::Result<()> {
        let contents = serde_json::to_vec(token).map_err(std::io::Error::other)?;
        tokio::fs::write(path, contents).await
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn authorize(&self) -> Result<Credential> {
        if let Err(e) = tokio::fs::create_dir_all(&self.token_dir).await {
            tracing::warn!(
                path = %self.token_dir.display(),
                error = %e,
                "Failed to create token directory"
            );
        }

        let path = self.token_path();
        if let Some(token) = self.load_token(&path).await {
            return Ok(Credential::new(self.account.clone(), token));
        }

        tracing::debug!(client_email = %self.account.client_email, "Authorizing with JWT");
        let token = self.exchange.exchange(&self.account).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to authorize with JWT");
        })?;

        if let Err(e) = self.save_token(&path, &token).await {
            tracing::error!(
                path = %path.display(),
                error = %e,
                "Failed to write JWT token"
            );
        }

        Ok(Credential::new(self.account.clone(), token))
    }
}
