use super::types::{request, response};
use crate::{
    modules::order::{
        repository::{self, OrderStatus},
        validation,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    validation::fields().run(&payload.data).map_err(|err| {
        tracing::warn!("Rejected order creation: {err}");
        err
    })?;

    // Create does not police status; anything unrecognised starts the order as pending.
    let fields = validation::into_fields(&payload.data)?;

    let order = repository::create(
        &ctx.orders,
        repository::CreateOrderPayload {
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status: fields.status.unwrap_or(OrderStatus::Pending),
            dishes: fields.dishes,
        },
    )
    .await;
    tracing::debug!("Created order {} ({})", order.id, order.status);

    Ok(response::Success::OrderCreated(order))
}
