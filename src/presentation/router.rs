use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::middleware;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::config::{CorsSettings, Settings};

/// Wraps assembled routes in the request-id, tracing and CORS layers.
pub fn create_router(routes: Router, settings: &Settings) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let router = routes
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer);

    if settings.server.cors.enabled {
        router.layer(cors_layer(&settings.server.cors))
    } else {
        router
    }
}

pub fn cors_layer(cors: &CorsSettings) -> CorsLayer {
    let origins = if is_wildcard(&cors.allow_origins) {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(parse_all::<HeaderValue>(&cors.allow_origins, "origin"))
    };
    let methods = if is_wildcard(&cors.allow_methods) {
        AllowMethods::any()
    } else {
        AllowMethods::list(parse_all::<Method>(&cors.allow_methods, "method"))
    };
    let headers = if is_wildcard(&cors.allow_headers) {
        AllowHeaders::any()
    } else {
        AllowHeaders::list(parse_all::<HeaderName>(&cors.allow_headers, "header"))
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
}

fn is_wildcard(values: &[String]) -> bool {
    values.is_empty() || values.iter().any(|v| v == "*")
}

fn parse_all<T: std::str::FromStr>(values: &[String], kind: &'static str) -> Vec<T> {
    values
        .iter()
        .filter_map(|value| match value.parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                tracing::warn!(kind, value = %value, "Ignoring invalid CORS entry");
                None
            }
        })
        .collect()
}
