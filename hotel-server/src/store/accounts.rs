use std::sync::Arc;

use shared::models::{Account, AccountInfo, RegisterRequest, Role};
use shared::{AppError, AppResult};
use tokio::sync::RwLock;
use validator::Validate;

/// Mock account store
///
/// Plain-text passwords, linear scan, no lockout. A placeholder, not a
/// security design.
#[derive(Debug, Clone)]
pub struct AccountStore {
    accounts: Arc<RwLock<Vec<Account>>>,
}

impl AccountStore {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::new(RwLock::new(accounts)),
        }
    }

    /// Store seeded with the default accounts
    pub fn seeded() -> Self {
        Self::new(super::seed::accounts())
    }

    /// 登录校验：用户名或邮箱 + 明文密码
    pub async fn authenticate(&self, login: &str, password: &str) -> Option<Account> {
        let accounts = self.accounts.read().await;
        accounts
            .iter()
            .find(|a| a.matches_login(login) && a.password == password)
            .cloned()
    }

    /// 注册：邮箱重复则拒绝，否则追加
    pub async fn register(&self, req: RegisterRequest) -> AppResult<AccountInfo> {
        req.validate()?;

        let mut accounts = self.accounts.write().await;
        if accounts.iter().any(|a| a.email == req.email) {
            return Err(AppError::email_taken());
        }

        let id = accounts.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let account = Account {
            id,
            username: req.username.unwrap_or_else(|| req.email.clone()),
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            role: Role::User,
        };
        let info = AccountInfo::from(&account);
        accounts.push(account);
        Ok(info)
    }

    pub async fn count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    fn register(email: &str) -> RegisterRequest {
        RegisterRequest {
            username: None,
            email: email.to_string(),
            password: "secret".to_string(),
            first_name: "Lu".to_string(),
            last_name: "Wei".to_string(),
        }
    }

    #[tokio::test]
    async fn test_authenticate_by_username_or_email() {
        let store = AccountStore::seeded();
        let admin = store.authenticate("admin", "admin123").await.unwrap();
        assert_eq!(admin.role, Role::Admin);

        let by_email = store.authenticate(&admin.email, "admin123").await;
        assert_eq!(by_email.map(|a| a.id), Some(admin.id));

        assert!(store.authenticate("admin", "wrong").await.is_none());
        assert!(store.authenticate("ghost@hotel.local", "admin123").await.is_none());
    }

    #[tokio::test]
    async fn test_register_appends_with_next_id() {
        let store = AccountStore::seeded();
        let before = store.count().await;

        let info = store.register(register("new@hotel.local")).await.unwrap();
        assert_eq!(info.username, "new@hotel.local");
        assert_eq!(info.role, Role::User);
        assert_eq!(store.count().await, before + 1);
        assert!(store.authenticate("new@hotel.local", "secret").await.is_some());
    }

    #[tokio::test]
    async fn test_register_duplicate_email_leaves_count_unchanged() {
        let store = AccountStore::seeded();
        store.register(register("dup@hotel.local")).await.unwrap();
        let before = store.count().await;

        let err = store.register(register("dup@hotel.local")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmailAlreadyRegistered);
        assert_eq!(store.count().await, before);
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_email() {
        let store = AccountStore::seeded();
        let err = store.register(register("not-an-email")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
