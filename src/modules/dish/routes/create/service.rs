use super::types::{request, response};
use crate::{
    modules::dish::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    validation::fields().run(&payload.data).map_err(|err| {
        tracing::warn!("Rejected dish creation: {err}");
        err
    })?;

    let fields = validation::into_fields(&payload.data)?;

    let dish = repository::create(
        &ctx.dishes,
        repository::CreateDishPayload {
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        },
    )
    .await;
    tracing::debug!("Created dish {}", dish.id);

    Ok(response::Success::DishCreated(dish))
}
