//! 假令牌服务
//!
//! 令牌格式：`fake-jwt-token.` + base64(JSON `{"id": <账户 ID>, "exp": <过期时间(秒)>}`)。
//! 未签名，服务端从不解码校验，只用于让前端走完登录流程。

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared::models::Account;
use shared::{AppError, AppResult};
use shared::util::now_secs;

/// 令牌前缀
pub const TOKEN_PREFIX: &str = "fake-jwt-token.";

/// 令牌载荷
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: i64,
    /// Unix 秒
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is missing the expected prefix")]
    MissingPrefix,
    #[error("token payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct TokenService {
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(ttl_secs: i64) -> Self {
        Self { ttl_secs }
    }

    /// 为账户签发令牌，有效期从当前时间起算
    pub fn issue(&self, account: &Account) -> AppResult<String> {
        let claims = TokenClaims {
            id: account.id,
            exp: now_secs() + self.ttl_secs,
        };
        let payload = serde_json::to_vec(&claims)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {}", e)))?;
        Ok(format!("{}{}", TOKEN_PREFIX, STANDARD.encode(payload)))
    }

    /// 解析令牌载荷 (仅供诊断与测试，不做过期检查)
    pub fn decode(token: &str) -> Result<TokenClaims, TokenError> {
        let encoded = token
            .strip_prefix(TOKEN_PREFIX)
            .ok_or(TokenError::MissingPrefix)?;
        let bytes = STANDARD.decode(encoded)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// 从 `Authorization` 头中提取 Bearer 令牌
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Role;

    fn account() -> Account {
        Account {
            id: 7,
            username: "desk".to_string(),
            email: "desk@hotel.local".to_string(),
            password: "pw".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            role: Role::User,
        }
    }

    #[test]
    fn test_issue_and_decode() {
        let before = now_secs();
        let token = TokenService::new(3600).issue(&account()).unwrap();
        assert!(token.starts_with(TOKEN_PREFIX));

        let claims = TokenService::decode(&token).unwrap();
        assert_eq!(claims.id, 7);
        assert!(claims.exp >= before + 3600);
        assert!(claims.exp <= now_secs() + 3600);
    }

    #[test]
    fn test_decode_rejects_foreign_tokens() {
        assert!(matches!(
            TokenService::decode("abc.def"),
            Err(TokenError::MissingPrefix)
        ));
        assert!(matches!(
            TokenService::decode("fake-jwt-token.***"),
            Err(TokenError::Encoding(_))
        ));
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(TokenService::extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(TokenService::extract_from_header("Bearer "), None);
        assert_eq!(TokenService::extract_from_header("Basic abc"), None);
    }
}
