//! Handler模块

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header::HeaderName, HeaderMap};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use common::errors::AppError;
use common::models::connection::{ConnectionDescriptor, TestConnectionResponse};
use common::models::user::{CreateUserRequest, User};

use crate::prober;
use crate::state::AppState;

/// Header toggling sandbox mode, read by the connection routes only.
pub static SANDBOX_MODE_HEADER: HeaderName = HeaderName::from_static("x-sandbox-mode");

fn sandbox_mode(headers: &HeaderMap) -> bool {
    headers
        .get(&SANDBOX_MODE_HEADER)
        .and_then(|v| v.to_str().ok())
        == Some("true")
}

/// 列出所有用户
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "用户列表", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.store.list().await?;
    Ok(Json(users))
}

/// 创建新用户
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "用户已创建", body = User),
        (status = 400, description = "请求体无效")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    let Json(req) = payload?;
    req.validate()?;

    let user = state.store.create(req).await?;
    Ok(Json(user))
}

/// 列出可用的数据库连接
///
/// 沙箱模式下返回固定的模拟连接目录；否则返回空列表（没有持久化的连接注册表）。
#[utoipa::path(
    get,
    path = "/api/connections",
    tag = "connections",
    responses(
        (status = 200, description = "连接列表", body = Vec<ConnectionDescriptor>)
    )
)]
pub async fn list_connections(headers: HeaderMap) -> Json<Vec<ConnectionDescriptor>> {
    if sandbox_mode(&headers) {
        return Json(prober::mock_connections());
    }
    Json(Vec::new())
}

/// 测试数据库连接
///
/// 探测失败仍返回 200，失败原因在响应体的 `message` 字段中。
#[utoipa::path(
    post,
    path = "/api/connections/test",
    tag = "connections",
    request_body = ConnectionDescriptor,
    responses(
        (status = 200, description = "连接测试结果", body = TestConnectionResponse),
        (status = 400, description = "请求体无效")
    )
)]
pub async fn test_connection(
    headers: HeaderMap,
    payload: Result<Json<ConnectionDescriptor>, JsonRejection>,
) -> Result<Json<TestConnectionResponse>, AppError> {
    let Json(descriptor) = payload?;

    let outcome = if sandbox_mode(&headers) {
        prober::sandbox_outcome(&descriptor)
    } else {
        prober::probe(&descriptor).await
    };

    Ok(Json(TestConnectionResponse {
        success: outcome.success,
        message: outcome.message,
        time: format!("{:.2}s", outcome.elapsed.as_secs_f64()),
    }))
}

/// 健康检查端点
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "服务运行正常", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.config.service_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// 健康检查响应
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}
