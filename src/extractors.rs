use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use bytes::Bytes;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use tracing::warn;

/// JSON request body that is parsed regardless of `Content-Type`.
///
/// Any read or decode failure is rejected as 400 with the decoder's message,
/// unlike `axum::Json`, which splits failures over 400/415/422.
pub struct JsonBody<T>(pub T);

/// `deserialize_with` helper: a JSON `null` string field decodes as `""`.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = (StatusCode, String);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| (e.status(), e.body_text()))?;
        serde_json::from_slice(&body).map(JsonBody).map_err(|e| {
            warn!(error = %e, "rejecting undecodable json body");
            (StatusCode::BAD_REQUEST, e.to_string())
        })
    }
}
