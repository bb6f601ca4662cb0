use super::types::response;
use crate::{modules::dish::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    let dishes = repository::find_many(&ctx.dishes).await;
    tracing::debug!("Listing {} dishes", dishes.len());

    Ok(response::Success::Dishes(dishes))
}
