use super::types::{request, response};
use crate::{
    modules::order::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let not_found = || response::Error::NotFound(format!("Order Id not found: {}", payload.id));

    let order = repository::find_by_id(&ctx.orders, &payload.id)
        .await
        .ok_or_else(not_found)?;

    validation::update_fields(&payload.id)
        .run(&payload.data)
        .map_err(|err| {
            tracing::warn!("Rejected update of order {}: {err}", payload.id);
            err
        })?;

    let fields = validation::into_fields(&payload.data)?;

    let updated = repository::update_by_id(
        &ctx.orders,
        &payload.id,
        repository::UpdateOrderPayload {
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status: fields.status.unwrap_or(order.status),
            dishes: fields.dishes,
        },
    )
    .await
    .ok_or_else(not_found)?;
    tracing::debug!(
        "Updated order {} ({} -> {})",
        updated.id,
        order.status,
        updated.status
    );

    Ok(response::Success::OrderUpdated(updated))
}
