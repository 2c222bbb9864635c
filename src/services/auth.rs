/// Identity session
///
/// The popup-based sign-in flow itself belongs to the identity provider and
/// stays opaque behind a trait; this module only owns the session-scoped
/// [`AuthUser`]: created on a successful sign-in, destroyed on sign-out,
/// otherwise read-only.
use crate::{error::AppResult, models::AuthUser};
use std::sync::Arc;
use tokio::sync::RwLock;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Run the interactive sign-in flow, yielding the signed-in user
    async fn sign_in(&self) -> AppResult<AuthUser>;

    /// Invalidate the provider-side session
    async fn sign_out(&self) -> AppResult<()>;
}

#[derive(Clone)]
pub struct AuthSession {
    provider: Arc<dyn IdentityProvider>,
    user: Arc<RwLock<Option<AuthUser>>>,
}

impl AuthSession {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            provider,
            user: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn sign_in(&self) -> AppResult<AuthUser> {
        let user = self.provider.sign_in().await?;
        tracing::info!(user_id = %user.id, "User signed in");
        *self.user.write().await = Some(user.clone());
        Ok(user)
    }

    pub async fn sign_out(&self) -> AppResult<()> {
        self.provider.sign_out().await?;
        let previous = self.user.write().await.take();
        if let Some(user) = previous {
            tracing::info!(user_id = %user.id, "User signed out");
        }
        Ok(())
    }

    pub async fn current_user(&self) -> Option<AuthUser> {
        self.user.read().await.clone()
    }
}
