use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tokio::sync::watch;
use tracing::info;

use models::user::UserProfile;

/// Mirrors the identity provider's current-user callback into local state.
///
/// Reads are lock-free (`arc-swap`); observers subscribe through a `watch`
/// channel and see every sign-in/sign-out transition.
pub struct SessionTracker {
    current: ArcSwapOption<UserProfile>,
    tx: watch::Sender<Option<UserProfile>>,
}

impl SessionTracker {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { current: ArcSwapOption::empty(), tx }
    }

    pub fn set_user(&self, user: UserProfile) {
        info!(email = %user.email, "session_user_set");
        self.current.store(Some(Arc::new(user.clone())));
        let _ = self.tx.send(Some(user));
    }

    pub fn clear(&self) {
        info!("session_cleared");
        self.current.store(None);
        let _ = self.tx.send(None);
    }

    pub fn current_user(&self) -> Option<Arc<UserProfile>> {
        self.current.load_full()
    }

    pub fn signed_in(&self) -> bool {
        self.current.load().is_some()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<UserProfile>> {
        self.tx.subscribe()
    }
}

impl Default for SessionTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tracks_sign_in_and_out() {
        let tracker = SessionTracker::new();
        assert!(!tracker.signed_in());
        assert!(tracker.current_user().is_none());

        tracker.set_user(UserProfile::new("u1", "a@x.com"));
        assert!(tracker.signed_in());
        assert_eq!(tracker.current_user().unwrap().email, "a@x.com");

        tracker.clear();
        assert!(!tracker.signed_in());
    }

    #[tokio::test]
    async fn subscribers_observe_transitions() {
        let tracker = SessionTracker::new();
        let mut rx = tracker.subscribe();

        tracker.set_user(UserProfile::new("u1", "a@x.com"));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_ref().unwrap().email, "a@x.com");

        tracker.clear();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
    }
}
