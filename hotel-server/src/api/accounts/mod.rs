//! Accounts API 模块
//!
//! 登录和注册均为公共路由。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/accounts", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/authenticate", post(handler::authenticate))
        .route("/register", post(handler::register))
}
