use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::Settings, routes};

pub fn create(app_state: AppState, config: &Settings) -> Router<()> {
    let app = Router::new()
        .route("/", get(|| async { "Hello, little Tracker!" }))
        .nest("/trackers", routes::trackers::router())
        .nest("/categories", routes::categories::router())
        .nest("/statistics", routes::statistics::router())
        .nest("/preferences", routes::preferences::router());

    let app_url = config.application.app_url.clone();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin.as_bytes() == app_url.as_bytes()
        }));

    app.with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
