//! 认证中间件

use axum::{extract::Request, middleware::Next, response::Response};

use crate::auth::TokenService;
use crate::security_log;
use shared::AppError;

/// 令牌存在性检查
///
/// 只检查 `Authorization: Bearer <token>` 头是否存在，不解码令牌。
///
/// # 跳过检查的请求
///
/// - `OPTIONS *` (CORS 预检)
/// - `GET` / `HEAD` 读接口
/// - 非 `/api/` 路径
/// - `/api/accounts/*` (登录与注册)
///
/// 缺少令牌时返回 401 Unauthorized。
pub async fn require_token(req: Request, next: Next) -> Result<Response, AppError> {
    let method = req.method();
    let path = req.uri().path();

    if method == http::Method::OPTIONS || method == http::Method::GET || method == http::Method::HEAD
    {
        return Ok(next.run(req).await);
    }

    if !path.starts_with("/api/") || path.starts_with("/api/accounts/") {
        return Ok(next.run(req).await);
    }

    let has_token = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(TokenService::extract_from_header)
        .is_some();

    if !has_token {
        security_log!(
            "WARN",
            "auth_missing",
            method = method.to_string(),
            uri = path.to_string()
        );
        return Err(AppError::not_authenticated());
    }

    Ok(next.run(req).await)
}
