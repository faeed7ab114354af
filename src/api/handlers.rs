use crate::service::{ChartView, DashboardService, TableSummary, ViewKind};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

/// 全部视图响应体
#[derive(Debug, Serialize)]
pub struct ViewsResponse {
    pub success: bool,
    pub views: Vec<ChartView>,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 全部七个视图
pub async fn list_views(State(dashboard): State<Arc<DashboardService>>) -> Response {
    let views = dashboard.views();
    tracing::debug!("Rendered {} views", views.len());
    (StatusCode::OK, Json(ViewsResponse { success: true, views })).into_response()
}

/// 单个视图
pub async fn get_view(
    State(dashboard): State<Arc<DashboardService>>,
    Path(kind): Path<ViewKind>,
) -> Json<ChartView> {
    Json(dashboard.view(kind))
}

/// 发票表概况和加载统计
pub async fn summary(State(dashboard): State<Arc<DashboardService>>) -> Json<TableSummary> {
    Json(dashboard.summary())
}
