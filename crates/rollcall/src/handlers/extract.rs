//! Body extractor accepting either a urlencoded form or JSON.

use axum::{
    extract::{FromRequest, Request},
    http::header,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::models::StatusResponse;

/// Decodes the body as JSON when the request says so, as a form otherwise.
///
/// An undecodable body is answered with `{"status": "failed"}`.
pub struct FormOrJson<T>(pub T);

impl<S, T> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Json<StatusResponse>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let decoded = if is_json {
            Json::<T>::from_request(req, state)
                .await
                .map(|Json(value)| value)
                .map_err(|e| e.body_text())
        } else {
            Form::<T>::from_request(req, state)
                .await
                .map(|Form(value)| value)
                .map_err(|e| e.body_text())
        };

        decoded.map(FormOrJson).map_err(|reason| {
            tracing::warn!(%reason, "Rejected request body");
            Json(StatusResponse::failed())
        })
    }
}
