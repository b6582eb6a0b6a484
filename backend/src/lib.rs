pub mod config;

use axum::Router;
use config::Config;
use tower_http::services::ServeDir;
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, timeout::TimeoutLayer,
};

/// Serves the landing page from `frontend_dir` and the wasm bundle under `/pkg`.
pub fn app(config: &Config) -> Router {
    let middleware = tower::ServiceBuilder::new()
        .layer(CompressionLayer::new().quality(tower_http::CompressionLevel::Fastest))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(CatchPanicLayer::new());

    Router::new()
        .nest_service("/pkg", ServeDir::new(&config.wasm_pkg_dir))
        .fallback_service(ServeDir::new(&config.frontend_dir))
        .layer(middleware)
}
