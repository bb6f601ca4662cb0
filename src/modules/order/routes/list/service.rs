use super::types::response;
use crate::{modules::order::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    let orders = repository::find_many(&ctx.orders).await;
    tracing::debug!("Listing {} orders", orders.len());

    Ok(response::Success::Orders(orders))
}
