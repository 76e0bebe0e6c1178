//! 路由模块

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// 创建应用路由
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route("/api/connections", get(handlers::list_connections))
        .route("/api/connections/test", post(handlers::test_connection))
        .route("/api/health", get(handlers::health_check))
}
