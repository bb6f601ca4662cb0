use super::{error::Error, validation::Data};
use axum::{
    async_trait,
    extract::{FromRequest, Json, Request},
};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Value,
}

/// The `data` object of a JSON request body. A missing or non-object `data` reads as `{}`.
pub struct Body(pub Data);

#[async_trait]
impl<S: Send + Sync> FromRequest<S> for Body {
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(envelope) = Json::<Envelope>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::warn!("Failed to parse request body: {}", rejection.body_text());
                Error::Validation(rejection.body_text())
            })?;

        match envelope.data {
            Value::Object(data) => Ok(Body(data)),
            _ => Ok(Body(Data::new())),
        }
    }
}
