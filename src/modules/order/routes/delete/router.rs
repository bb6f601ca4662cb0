use super::handler;
use crate::types::Context;
use axum::routing::{delete, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/:order_id", delete(handler::handler))
}
