mod create;
mod get;
mod list;
mod update;

use crate::{modules::router::other_methods, types::Context};
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(list::get_router())
        .merge(create::get_router())
        .merge(get::get_router())
        .merge(update::get_router())
        .route("/", other_methods())
        .route("/:dish_id", other_methods())
}
