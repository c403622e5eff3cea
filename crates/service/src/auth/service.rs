use std::sync::Arc;

use tracing::{info, instrument};

use models::user::UserProfile;

use super::domain::{SignInInput, SignUpInput};
use super::errors::AuthError;
use super::provider::IdentityProvider;
use super::session::SessionTracker;

/// Auth workflows over a pluggable identity provider. Every successful
/// sign-in/sign-up lands the user in the shared [`SessionTracker`], and
/// sign-out clears it, so the session mirror stays consistent with the
/// provider.
pub struct AuthService<P: IdentityProvider> {
    provider: Arc<P>,
    tracker: Arc<SessionTracker>,
}

impl<P: IdentityProvider> AuthService<P> {
    pub fn new(provider: Arc<P>, tracker: Arc<SessionTracker>) -> Self {
        Self { provider, tracker }
    }

    pub fn tracker(&self) -> &Arc<SessionTracker> {
        &self.tracker
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn sign_up(&self, input: SignUpInput) -> Result<UserProfile, AuthError> {
        let user = self.provider.sign_up(input).await?;
        info!(email = %user.email, "user_registered");
        self.tracker.set_user(user.clone());
        Ok(user)
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn sign_in(&self, input: SignInInput) -> Result<UserProfile, AuthError> {
        let user = self.provider.sign_in(input).await?;
        info!(email = %user.email, "user_signed_in");
        self.tracker.set_user(user.clone());
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn sign_in_federated(&self) -> Result<UserProfile, AuthError> {
        let user = self.provider.sign_in_federated().await?;
        info!(email = %user.email, "user_signed_in_federated");
        self.tracker.set_user(user.clone());
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.provider.sign_out().await?;
        self.tracker.clear();
        Ok(())
    }

    pub async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        self.provider.send_password_reset(email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::provider::mock::MockIdentityProvider;

    fn service() -> AuthService<MockIdentityProvider> {
        AuthService::new(
            Arc::new(MockIdentityProvider::default()),
            Arc::new(SessionTracker::new()),
        )
    }

    fn sign_up_input() -> SignUpInput {
        SignUpInput {
            email: "a@x.com".into(),
            password: "secret1".into(),
            display_name: Some("Ayesha".into()),
            photo_url: None,
        }
    }

    #[tokio::test]
    async fn sign_up_mirrors_profile_into_session() {
        let svc = service();
        let user = svc.sign_up(sign_up_input()).await.unwrap();
        assert_eq!(user.display_name.as_deref(), Some("Ayesha"));
        assert_eq!(svc.tracker().current_user().unwrap().email, "a@x.com");
    }

    #[tokio::test]
    async fn duplicate_sign_up_conflicts() {
        let svc = service();
        svc.sign_up(sign_up_input()).await.unwrap();
        assert!(matches!(svc.sign_up(sign_up_input()).await, Err(AuthError::Conflict)));
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let svc = service();
        svc.sign_up(sign_up_input()).await.unwrap();
        svc.sign_out().await.unwrap();

        let err = svc
            .sign_in(SignInInput { email: "a@x.com".into(), password: "wrong".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized));
        assert!(!svc.tracker().signed_in());
    }

    #[tokio::test]
    async fn sign_out_clears_the_session() {
        let svc = service();
        svc.sign_up(sign_up_input()).await.unwrap();
        assert!(svc.tracker().signed_in());
        svc.sign_out().await.unwrap();
        assert!(!svc.tracker().signed_in());
    }

    #[tokio::test]
    async fn password_reset_reaches_the_provider() {
        let provider = Arc::new(MockIdentityProvider::default());
        let svc = AuthService::new(provider.clone(), Arc::new(SessionTracker::new()));
        svc.sign_up(sign_up_input()).await.unwrap();

        svc.send_password_reset("a@x.com").await.unwrap();
        assert_eq!(provider.reset_requests(), vec!["a@x.com".to_string()]);

        assert!(svc.send_password_reset("nobody@x.com").await.is_err());
    }

    #[tokio::test]
    async fn federated_sign_in_uses_provider_account() {
        let provider = Arc::new(MockIdentityProvider::default());
        provider.set_federated_account(UserProfile::new("g1", "g@x.com"));
        let svc = AuthService::new(provider, Arc::new(SessionTracker::new()));

        let user = svc.sign_in_federated().await.unwrap();
        assert_eq!(user.uid, "g1");
        assert_eq!(svc.tracker().current_user().unwrap().email, "g@x.com");
    }
}
