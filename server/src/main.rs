mod api;
mod config;
mod state;

use std::sync::Arc;

use axum::extract::MatchedPath;
use axum::http::{HeaderValue, Request};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use souschef_core::{GoogleCse, MemoryCatalog, MockClassifier, StaticPlaces, WebSearchProvider};

use crate::config::Config;
use crate::state::AppContext;

/// Application state shared across all handlers
pub type AppState = Arc<AppContext>;

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the web search provider from config; missing credentials leave
/// discovery unconfigured rather than silently empty.
fn build_search_provider(config: &Config) -> Option<Box<dyn WebSearchProvider>> {
    match (&config.google_api_key, &config.google_cse_id) {
        (Some(key), Some(engine_id)) => match GoogleCse::new(key, engine_id) {
            Ok(provider) => Some(Box::new(provider)),
            Err(e) => {
                tracing::warn!(error = %e, "web search disabled");
                None
            }
        },
        _ => {
            tracing::info!(
                "web search credentials absent, /api/web-recipes/discover will report 503"
            );
            None
        }
    }
}

fn cors_layer(allow_origins: &str) -> CorsLayer {
    if allow_origins.trim() == "*" {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = allow_origins
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    let config = Config::from_env();
    tracing::info!(
        threshold = config.match_threshold,
        port = config.port,
        "starting souschef server"
    );

    let state: AppState = Arc::new(AppContext {
        catalog: Arc::new(MemoryCatalog::seeded()),
        classifier: Box::new(MockClassifier::new()),
        places: Box::new(StaticPlaces::new()),
        search: build_search_provider(&config),
        match_threshold: config.match_threshold,
    });

    let app = api::router()
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %matched_path,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &Span| {
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                )
                .on_failure(
                    |error: tower_http::classify::ServerErrorsFailureClass,
                     latency: std::time::Duration,
                     _span: &Span| {
                        tracing::error!(
                            error = %error,
                            latency_ms = %latency.as_millis(),
                            "request failed"
                        );
                    },
                ),
        )
        .layer(cors_layer(&config.cors_allow_origins));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .unwrap();

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());
    tracing::info!("API docs available at /docs");

    axum::serve(listener, app).await.unwrap();
}
