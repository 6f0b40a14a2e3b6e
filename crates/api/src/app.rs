use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use persistence::SharedStore;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{analytics, audit, bookmarks, cameras, dashboard, health, index};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: SharedStore,
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

pub fn create_app(config: Config, store: SharedStore) -> Router {
    let config = Arc::new(config);
    let cors = cors_layer(&config);
    let timeout = Duration::from_secs(config.server.request_timeout_secs);

    let state = AppState { config, store };

    let camera_routes = Router::new()
        .route("/Interface/Cameras/GetCameras", get(cameras::get_cameras))
        .route("/Interface/Cameras/GetGroups", get(cameras::get_groups))
        .route("/Interface/Cameras/GetStatus", get(cameras::get_status))
        .route(
            "/Interface/Cameras/Activation",
            get(cameras::activation).post(cameras::activation),
        );

    let analytics_routes = Router::new()
        .route(
            "/Interface/Analytics/GetAnalyticsConfigurations",
            get(analytics::get_configurations),
        )
        .route("/Interface/Analytics/GetStatus", get(analytics::get_configurations))
        .route("/Interface/Analytics/GetCounters", get(analytics::get_counters))
        .route(
            "/Interface/Analytics/ResetCounter",
            get(analytics::reset_counter).post(analytics::reset_counter),
        )
        .route("/Interface/Analytics/Search", get(analytics::search))
        .route("/Interface/Analytics/Recent", get(analytics::recent))
        .route("/Interface/Analytics/Chart", get(analytics::chart));

    let bookmark_routes = Router::new()
        .route("/Interface/Cameras/Bookmarks/Search", get(bookmarks::search))
        .route(
            "/Interface/Cameras/Bookmarks/Add",
            get(bookmarks::add).post(bookmarks::add),
        )
        .route(
            "/Interface/Cameras/Bookmarks/Delete",
            delete(bookmarks::remove).post(bookmarks::remove),
        );

    let system_routes = Router::new()
        .route("/Interface/Audit/Search", get(audit::search))
        .route("/Interface/Dashboard/Stats", get(dashboard::stats))
        .route("/Interface/System/Status", get(dashboard::system_status));

    let public_routes = Router::new()
        .route("/", get(index::service_info))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(camera_routes)
        .merge(analytics_routes)
        .merge(bookmark_routes)
        .merge(system_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}

