use crate::{
    modules,
    types::{Context, ToContext},
    utils::config::Config,
};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Router,
};
use std::{io, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{cors, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub async fn new(config: Config) -> Self {
        let ctx: Arc<Context> = Arc::new(config.to_context().await);

        let router = modules::get_router()
            .with_state(ctx.clone())
            .layer(DefaultBodyLimit::max(1024 * 1024))
            .layer(trace::TraceLayer::new_for_http())
            .layer(
                cors::CorsLayer::new()
                    .allow_methods([
                        Method::OPTIONS,
                        Method::GET,
                        Method::POST,
                        Method::PUT,
                        Method::PATCH,
                        Method::DELETE,
                    ])
                    .allow_headers([header::CONTENT_TYPE])
                    .allow_origin(cors::Any),
            );

        Self { ctx, router }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn serve(self) -> io::Result<()> {
        let listener =
            TcpListener::bind(format!("{}:{}", self.ctx.app.host, self.ctx.app.port)).await?;

        self.serve_with(listener).await
    }

    pub async fn serve_with(self, listener: TcpListener) -> io::Result<()> {
        tracing::info!(
            "App is running on {} ({:?}, public url {})",
            listener.local_addr()?,
            self.ctx.app.environment,
            self.ctx.app.url
        );

        axum::serve(listener, self.router).await
    }
}
