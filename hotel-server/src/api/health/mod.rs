//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /health | GET | 简单健康检查 | 无 |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::SystemTime;

use crate::core::ServerState;

/// 健康检查路由 - 公共路由 (无需认证)
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    environment: String,
    uptime_seconds: u64,
    rooms: usize,
    bookings: usize,
}

// 服务器启动时间 (懒加载静态变量)
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

fn get_uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        uptime_seconds: get_uptime_seconds(),
        rooms: state.rooms.list_rooms().await.len(),
        bookings: state.bookings.list().await.len(),
    })
}
