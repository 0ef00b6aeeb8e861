use chrono::{DateTime, Duration, Utc};

use super::{AccessToken, AssertionClaims, ServiceAccount, TokenGrant};

/// Tokens this close to expiry are renewed before use.
pub const TOKEN_RENEWAL_MARGIN: Duration = Duration::seconds(60);

/// Lifetime requested for a signed assertion. The token endpoint caps it at
/// one hour.
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Build the JWT claims for a service-account token request.
pub fn assertion_claims(
    account: &ServiceAccount,
    scope: &str,
    audience: &str,
    now: DateTime<Utc>,
) -> AssertionClaims {
    let iat = now.timestamp();
    AssertionClaims {
        iss: account.client_email.clone(),
        scope: scope.to_string(),
        aud: audience.to_string(),
        iat,
        exp: iat + ASSERTION_LIFETIME_SECS,
    }
}

/// Convert a token endpoint response into a stored token.
pub fn token_from_grant(grant: TokenGrant, now: DateTime<Utc>) -> AccessToken {
    let mut token = AccessToken::new(
        grant.access_token,
        grant.expires_in.map(|secs| now + Duration::seconds(secs)),
    );
    if let Some(token_type) = grant.token_type {
        token.token_type = token_type;
    }
    token
}

/// Whether a token should be renewed before being sent.
///
/// Tokens without an expiry are assumed valid.
pub fn is_token_expired(token: &AccessToken, now: DateTime<Utc>) -> bool {
    token
        .expiry_date
        .is_some_and(|expiry| expiry <= now + TOKEN_RENEWAL_MARGIN)
}
