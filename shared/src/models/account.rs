//! Account Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    Admin,
    #[default]
    User,
}

/// Account entity (mock backend only)
///
/// The password is kept in plain text: the backend is a placeholder and
/// performs no hashing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl Account {
    /// Login identifier matches either the username or the email
    pub fn matches_login(&self, login: &str) -> bool {
        self.username == login || self.email == login
    }
}

/// Account as returned to clients (no password)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl From<&Account> for AccountInfo {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            email: account.email.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            role: account.role,
        }
    }
}

/// Login request (POST /api/accounts/authenticate)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticateRequest {
    #[serde(alias = "email")]
    pub username: String,
    pub password: String,
}

/// Login response: account plus token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateResponse {
    #[serde(flatten)]
    pub account: AccountInfo,
    pub jwt_token: String,
}

/// Registration request (POST /api/accounts/register)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Defaults to the email when absent
    #[serde(default)]
    pub username: Option<String>,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}
