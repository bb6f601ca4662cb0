use super::types::{request, response};
use crate::{
    modules::order::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::delete_by_id(&ctx.orders, &payload.id, |order| {
        validation::is_pending(order.status).map_err(|err| {
            tracing::warn!("Refused to delete order {} ({}): {err}", order.id, order.status);
            err
        })
    })
    .await
    .ok_or_else(|| response::Error::NotFound(format!("Order Id not found: {}", payload.id)))?
    .map(|order| {
        tracing::debug!("Deleted order {}", order.id);
        response::Success::OrderDeleted
    })
}
