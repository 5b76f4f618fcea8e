//! Accounts Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::security_log;
use shared::models::{AuthenticateRequest, AuthenticateResponse, RegisterRequest};
use shared::{ApiResponse, AppError, AppResult};

/// POST /api/accounts/authenticate - 登录
///
/// 账户不存在与密码错误返回相同的错误信息。
pub async fn authenticate(
    State(state): State<ServerState>,
    Json(req): Json<AuthenticateRequest>,
) -> AppResult<Json<AuthenticateResponse>> {
    let Some(account) = state.accounts.authenticate(&req.username, &req.password).await else {
        security_log!("WARN", "login_failed", username = req.username.clone());
        return Err(AppError::invalid_credentials());
    };

    let jwt_token = state.tokens.issue(&account)?;
    security_log!(
        "INFO",
        "login_success",
        user_id = account.id,
        username = account.username.clone()
    );

    Ok(Json(AuthenticateResponse {
        account: (&account).into(),
        jwt_token,
    }))
}

/// POST /api/accounts/register - 注册
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<ApiResponse<()>> {
    let email = req.email.clone();
    let info = state.accounts.register(req).await.inspect_err(|e| {
        tracing::warn!(email = %email, error = %e, "Registration rejected");
    })?;
    tracing::info!(account_id = info.id, email = %info.email, "Account registered");
    Ok(ApiResponse::message("Registration successful"))
}
