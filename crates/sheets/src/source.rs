//! Roster reads through the Sheets values API.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rollcall_core::auth::{is_token_expired, AccessToken, Credential, TokenExchange};
use rollcall_core::roster::{first_column, RosterEntry};
use rollcall_core::source::{RosterSource, SheetRange, TransportError};
use serde::Deserialize;
use url::Url;

/// Body of `GET /v4/spreadsheets/{id}/values/{range}`.
///
/// `values` is omitted entirely when the range holds no data.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Option<Vec<Vec<serde_json::Value>>>,
}

pub struct GoogleSheetsSource {
    http_client: reqwest::Client,
    api_base: Url,
    exchange: Arc<dyn TokenExchange>,
}

impl GoogleSheetsSource {
    pub fn new(http_client: reqwest::Client, api_base: Url, exchange: Arc<dyn TokenExchange>) -> Self {
        Self {
            http_client,
            api_base,
            exchange,
        }
    }

    fn values_url(&self, range: &SheetRange) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.api_base.as_str().trim_end_matches('/'),
            urlencoding::encode(&range.spreadsheet_id),
            urlencoding::encode(&range.range),
        )
    }

    /// The credential's token, renewed first if it is about to expire.
    async fn bearer_token(&self, credential: &Credential) -> Result<AccessToken, TransportError> {
        if !is_token_expired(&credential.token, Utc::now()) {
            return Ok(credential.token.clone());
        }

        tracing::debug!(client_email = %credential.account.client_email, "Renewing expired access token");
        self.exchange
            .exchange(&credential.account)
            .await
            .map_err(|e| TransportError::Auth(e.to_string()))
    }
}

#[async_trait]
impl RosterSource for GoogleSheetsSource {
    async fn try_fetch(
        &self,
        credential: &Credential,
        range: &SheetRange,
    ) -> Result<Vec<RosterEntry>, TransportError> {
        let token = self.bearer_token(credential).await?;

        let response = self
            .http_client
            .get(self.values_url(range))
            .header(reqwest::header::AUTHORIZATION, token.authorization())
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: ValueRange = response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        let rows = body.values.unwrap_or_default();
        tracing::debug!(
            spreadsheet_id = %range.spreadsheet_id,
            rows = rows.len(),
            "Read roster range"
        );

        Ok(first_column(
            rows.into_iter()
                .map(|row| row.into_iter().map(cell_text).collect::<Vec<_>>()),
        ))
    }
}

/// Render a cell as text. Empty cells come back as `""` or `null`.
fn cell_text(cell: serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(text) => text,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
