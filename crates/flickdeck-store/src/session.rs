use tokio::sync::watch;
use tracing::info;

/// Session change reported by the external auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn { user_id: String },
    TokenRefreshed { user_id: String },
    SignedOut,
}

/// Holds the nullable current user id and notifies subscribers on every
/// session change. This is the only way session state reaches the rest of
/// the application; nothing reads ambient globals.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: watch::Sender<Option<String>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    pub fn with_user(user_id: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(Some(user_id.into()));
        Self { tx }
    }

    /// "Is there a session right now" — the nullable user identifier.
    pub fn current_user_id(&self) -> Option<String> {
        self.tx.borrow().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// Receiver notified on sign-in, sign-out and token refresh.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.tx.subscribe()
    }

    /// Apply a session change from the auth collaborator.
    pub fn apply(&self, event: AuthEvent) {
        match event {
            AuthEvent::SignedIn { user_id } => {
                info!(%user_id, "Session signed in");
                self.tx.send_replace(Some(user_id));
            }
            AuthEvent::TokenRefreshed { user_id } => {
                // Refresh keeps the same identity but still notifies
                self.tx.send_replace(Some(user_id));
            }
            AuthEvent::SignedOut => {
                info!("Session signed out");
                self.tx.send_replace(None);
            }
        }
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_session_starts_signed_out() {
        let session = SessionHandle::new();
        assert_eq!(session.current_user_id(), None);
        assert!(!session.is_signed_in());
    }

    #[tokio::test]
    async fn test_sign_in_and_out_update_current_user() {
        let session = SessionHandle::new();
        session.apply(AuthEvent::SignedIn {
            user_id: "user-1".to_string(),
        });
        assert_eq!(session.current_user_id(), Some("user-1".to_string()));

        session.apply(AuthEvent::SignedOut);
        assert_eq!(session.current_user_id(), None);
    }

    #[tokio::test]
    async fn test_subscribers_see_every_session_change() {
        let session = SessionHandle::new();
        let mut rx = session.subscribe();

        session.apply(AuthEvent::SignedIn {
            user_id: "user-1".to_string(),
        });
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().clone(), Some("user-1".to_string()));

        session.apply(AuthEvent::TokenRefreshed {
            user_id: "user-1".to_string(),
        });
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().clone(), Some("user-1".to_string()));

        session.apply(AuthEvent::SignedOut);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().clone(), None);
    }
}
