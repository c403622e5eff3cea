use async_trait::async_trait;

use models::user::UserProfile;

use super::domain::{SignInInput, SignUpInput};
use super::errors::AuthError;

/// Client surface of the third-party identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, input: SignUpInput) -> Result<UserProfile, AuthError>;
    async fn sign_in(&self, input: SignInInput) -> Result<UserProfile, AuthError>;
    /// Federated (popup-style) sign-in; the provider decides the account.
    async fn sign_in_federated(&self) -> Result<UserProfile, AuthError>;
    async fn sign_out(&self) -> Result<(), AuthError>;
    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError>;
}

/// Simple in-memory provider for tests and doc examples.
pub mod mock {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use uuid::Uuid;

    use super::*;

    #[derive(Default)]
    pub struct MockIdentityProvider {
        accounts: Mutex<HashMap<String, (String, UserProfile)>>, // key: email -> (password, profile)
        federated_account: Mutex<Option<UserProfile>>,
        reset_requests: Mutex<Vec<String>>,
    }

    impl MockIdentityProvider {
        /// Preload the account the next federated sign-in resolves to.
        pub fn set_federated_account(&self, profile: UserProfile) {
            *self.federated_account.lock().unwrap() = Some(profile);
        }

        pub fn reset_requests(&self) -> Vec<String> {
            self.reset_requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl IdentityProvider for MockIdentityProvider {
        async fn sign_up(&self, input: SignUpInput) -> Result<UserProfile, AuthError> {
            if !input.email.contains('@') {
                return Err(AuthError::Validation("invalid email".into()));
            }
            if input.password.len() < 6 {
                return Err(AuthError::Validation("password too short (>=6)".into()));
            }
            let mut accounts = self.accounts.lock().unwrap();
            if accounts.contains_key(&input.email) {
                return Err(AuthError::Conflict);
            }
            let mut profile = UserProfile::new(Uuid::new_v4().to_string(), input.email.clone());
            profile.display_name = input.display_name;
            profile.photo_url = input.photo_url;
            accounts.insert(input.email, (input.password, profile.clone()));
            Ok(profile)
        }

        async fn sign_in(&self, input: SignInInput) -> Result<UserProfile, AuthError> {
            let accounts = self.accounts.lock().unwrap();
            match accounts.get(&input.email) {
                Some((password, profile)) if *password == input.password => Ok(profile.clone()),
                _ => Err(AuthError::Unauthorized),
            }
        }

        async fn sign_in_federated(&self) -> Result<UserProfile, AuthError> {
            self.federated_account
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| AuthError::Provider("no federated account configured".into()))
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            Ok(())
        }

        async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
            if !self.accounts.lock().unwrap().contains_key(email) {
                return Err(AuthError::Provider("no account for that email".into()));
            }
            self.reset_requests.lock().unwrap().push(email.to_string());
            Ok(())
        }
    }
}
