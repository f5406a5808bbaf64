use async_trait::async_trait;
use serde::Serialize;
use switchyard_core::{AppResult, CallerIdentity};

/// Username/password login payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginInput {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

/// Backend port that turns credentials into caller identities.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verifies a session token.
    async fn authenticate_token(&self, token: &str) -> AppResult<CallerIdentity>;

    /// Verifies an accesskey token.
    async fn authenticate_accesskey(&self, accesskey: &str) -> AppResult<CallerIdentity>;

    /// Exchanges username and password for a session token.
    async fn login(&self, input: LoginInput) -> AppResult<String>;
}
