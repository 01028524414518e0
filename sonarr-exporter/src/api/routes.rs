//! Exporter routes.

use axum::Router;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tracing::debug;

use crate::api::server::AppState;
use crate::metrics::prometheus;

const LANDING_PAGE: &str = r#"<html>
<head><title>Sonarr Exporter</title></head>
<body>
<h1>Sonarr Exporter</h1>
<p><a href="metrics">Metrics</a></p>
</body>
</html>
"#;

/// Create the exporter router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/metrics", get(metrics))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Run one collection cycle and encode it. Always answers 200; upstream
/// failures only show up in the metric values.
async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let observations = state.collector.collect().await;
    let body = prometheus::encode(state.collector.describe(), &observations);
    debug!(samples = observations.len(), bytes = body.len(), "Served scrape");

    ([(header::CONTENT_TYPE, prometheus::CONTENT_TYPE)], body)
}
