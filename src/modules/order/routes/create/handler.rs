use super::{service::service, types::request};
use crate::{types::Context, utils::body::Body};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(State(ctx): State<Arc<Context>>, Body(data): Body) -> impl IntoResponse {
    service(ctx, request::Payload { data }).await
}
