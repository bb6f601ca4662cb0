use super::{dish, order};
use crate::{types::Context, utils::error::Error};
use axum::{
    extract::OriginalUri,
    http::Method,
    routing::{MethodRouter, Router},
};
use std::sync::Arc;

pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> Error {
    Error::MethodNotAllowed(format!("{} not allowed for {}", method, uri.path()))
}

/// Answers 405 for the methods no operation router claims on a path. Routed after the
/// operations so it merges into their method routers.
pub fn other_methods() -> MethodRouter<Arc<Context>> {
    MethodRouter::new().fallback(method_not_allowed)
}

pub async fn path_not_found(OriginalUri(uri): OriginalUri) -> Error {
    Error::NotFound(format!("Path not found: {}", uri.path()))
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/dishes", dish::routes::get_router())
        .nest("/orders", order::routes::get_router())
        .fallback(path_not_found)
}
