use grubdash_backend_rs::{
    app::App,
    utils::config::{AppConfig, AppEnvironment, Config, DataConfig},
};
use serde_json::Value;
use tokio::net::TcpListener;

/// Serves a fresh, unseeded app on an ephemeral port and returns its base url.
pub async fn spawn_app() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = App::new(Config {
        app: AppConfig {
            host: addr.ip().to_string(),
            environment: AppEnvironment::Development,
            port: addr.port(),
            url: format!("http://{}", addr),
        },
        data: DataConfig { seed: false },
    })
    .await;

    tokio::spawn(async move { app.serve_with(listener).await });

    format!("http://{}", addr)
}

pub async fn error_of(response: reqwest::Response) -> String {
    let body = response.json::<Value>().await.unwrap();
    body["error"].as_str().unwrap().to_string()
}
