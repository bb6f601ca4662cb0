use super::types::{request, response};
use crate::{modules::dish::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_id(&ctx.dishes, &payload.id)
        .await
        .ok_or_else(|| response::Error::NotFound(format!("Dish does not exist: {}", payload.id)))
        .map(response::Success::Dish)
}
