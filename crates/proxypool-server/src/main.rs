use anyhow::Context;
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::path::Path;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
struct AppState {
    upstream: String,
    client: reqwest::Client,
}

impl AppState {
    fn new(upstream: &str) -> Self {
        Self {
            upstream: upstream.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("proxypool_server=info,tower_http=info")),
        )
        .init();

    let upstream =
        std::env::var("PROXYPOOL_UPSTREAM").unwrap_or_else(|_| "http://localhost:7001".to_string());
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "./dist".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());

    let app = app(AppState::new(&upstream), &static_dir);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("Server listening on {}", addr);
    tracing::info!("Serving static files from {}", static_dir);
    tracing::info!("Forwarding /proxies to {}", upstream);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn app(state: AppState, static_dir: &str) -> Router {
    let index = Path::new(static_dir).join("index.html");

    Router::new()
        .route("/proxies", get(forward))
        .route("/proxies/one", get(forward))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Passes the request through to the upstream pool, query string included.
async fn forward(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or_else(|| uri.path());
    let url = format!("{}{}", state.upstream, path);
    tracing::debug!("Forwarding to {}", url);

    let resp = match state.client.get(&url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!("Upstream request to {} failed: {}", url, e);
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let status = resp.status();
    let content_type = resp.headers().get(header::CONTENT_TYPE).cloned();

    match resp.bytes().await {
        Ok(body) => {
            let mut response = (status, body).into_response();
            if let Some(ct) = content_type {
                response.headers_mut().insert(header::CONTENT_TYPE, ct);
            }
            response
        }
        Err(e) => {
            tracing::error!("Reading upstream body from {} failed: {}", url, e);
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}
