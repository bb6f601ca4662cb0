use super::types::{request, response};
use crate::{
    modules::dish::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let not_found = || response::Error::NotFound(format!("Dish does not exist: {}", payload.id));

    repository::find_by_id(&ctx.dishes, &payload.id)
        .await
        .ok_or_else(not_found)?;

    validation::fields()
        .run(&payload.data)
        .and_then(|_| validation::id_matches_route(&payload.id, &payload.data))
        .map_err(|err| {
            tracing::warn!("Rejected update of dish {}: {err}", payload.id);
            err
        })?;

    let fields = validation::into_fields(&payload.data)?;

    repository::update_by_id(
        &ctx.dishes,
        &payload.id,
        repository::UpdateDishPayload {
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        },
    )
    .await
    .ok_or_else(not_found)
    .map(response::Success::DishUpdated)
}
