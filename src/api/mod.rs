pub mod handlers;

pub use handlers::*;

use crate::service::DashboardService;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;

/// 构建路由
pub fn router(dashboard: Arc<DashboardService>) -> Router {
    let view_routes = Router::new()
        .route("/api/views", get(list_views))
        .route("/api/views/:view", get(get_view))
        .route("/api/summary", get(summary))
        .with_state(dashboard);

    Router::new()
        .route("/health", get(health_check))
        .merge(view_routes)
        .layer(ServiceBuilder::new())
}
