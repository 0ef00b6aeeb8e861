//! Service-account JWT bearer grant.
//!
//! The service account signs a short-lived assertion with its RS256 key and
//! trades it for an access token at the token endpoint.
//! See: <https://developers.google.com/identity/protocols/oauth2/service-account#httprest>

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use rollcall_core::auth::{
    assertion_claims, token_from_grant, AccessToken, AuthError, Result, ServiceAccount,
    TokenExchange, TokenGrant, SPREADSHEETS_READONLY_SCOPE,
};
use url::Url;

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Exchanges a signed service-account assertion for an access token.
#[derive(Debug, Clone)]
pub struct JwtBearerExchange {
    http_client: reqwest::Client,
    token_uri: Url,
    scope: String,
}

impl JwtBearerExchange {
    /// Create an exchange requesting read-only spreadsheet access.
    pub fn new(http_client: reqwest::Client, token_uri: Url) -> Self {
        Self {
            http_client,
            token_uri,
            scope: SPREADSHEETS_READONLY_SCOPE.to_string(),
        }
    }

    fn sign_assertion(&self, account: &ServiceAccount, now: DateTime<Utc>) -> Result<String> {
        let claims = assertion_claims(account, &self.scope, self.token_uri.as_str(), now);

        let key = EncodingKey::from_rsa_pem(account.private_key.as_bytes())
            .map_err(|e| AuthError::InvalidKey(e.to_string()))?;

        encode(&Header::new(Algorithm::RS256), &claims, &key)
            .map_err(|e| AuthError::InvalidKey(format!("Failed to sign assertion: {}", e)))
    }
}

#[async_trait]
impl TokenExchange for JwtBearerExchange {
    async fn exchange(&self, account: &ServiceAccount) -> Result<AccessToken> {
        let now = Utc::now();
        let assertion = self.sign_assertion(account, now)?;

        let response = self
            .http_client
            .post(self.token_uri.clone())
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| AuthError::Exchange(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Exchange(format!("{}: {}", status, body)));
        }

        let grant: TokenGrant = response
            .json()
            .await
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        tracing::debug!(
            client_email = %account.client_email,
            expires_in = ?grant.expires_in,
            "Exchanged service account assertion for access token"
        );

        Ok(token_from_grant(grant, now))
    }
}
