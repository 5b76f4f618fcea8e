//! 认证模块
//!
//! 占位认证，不做任何签名校验：
//! - [`TokenService`] - 签发未签名的假令牌
//! - [`require_token`] - 写接口的令牌存在性检查

pub mod middleware;
pub mod token;

pub use middleware::require_token;
pub use token::{TokenClaims, TokenError, TokenService};
