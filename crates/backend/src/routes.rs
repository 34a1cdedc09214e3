use axum::http::HeaderValue;
use axum::{middleware, routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::config::ServerConfig;
use crate::system::middleware::request_logger::request_logger;

/// Конфигурация всех роутов приложения
pub fn configure_routes(config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(handlers::service::root))
        .route("/health", get(handlers::service::health))
        // Всё остальное — собранный виджет
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors_layer(config))
}

/// CORS for the widget embedded on partner sites
///
/// `*` (or an empty list) allows any origin without credentials; an explicit
/// origin list also allows credentials.
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
