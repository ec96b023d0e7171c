use flickdeck_models::{Movie, Notification, WatchlistEntry};
use flickdeck_store::{SessionHandle, StoreError, WatchlistStore};
use tracing::{debug, warn};

use crate::notify::Notifier;

/// Observable membership state of one (user, movie) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    NotInList,
    InList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// No session: the caller redirects to sign-in. Deliberate guard, not
    /// an error, and no store call is made.
    SignInRequired,
}

/// The shared watchlist toggle workflow used by every screen that shows a
/// membership button (hero banner, card, detail page).
///
/// Reconciliation is a one-shot check on mount, not a subscription:
/// changes made from another tab are not observed until the next mount.
#[derive(Debug)]
pub struct WatchlistSync {
    user_id: Option<String>,
    membership: Membership,
}

impl WatchlistSync {
    /// Query the store once for the signed-in user's membership. Signed-out
    /// sessions start at `NotInList` without touching the store.
    pub async fn reconcile(
        store: &dyn WatchlistStore,
        session: &SessionHandle,
        movie_id: u64,
    ) -> Result<Self, StoreError> {
        let user_id = session.current_user_id();
        let membership = match &user_id {
            Some(uid) => {
                if store.contains(uid, movie_id).await? {
                    Membership::InList
                } else {
                    Membership::NotInList
                }
            }
            None => Membership::NotInList,
        };

        debug!(movie_id, ?membership, "Reconciled watchlist membership");
        Ok(Self {
            user_id,
            membership,
        })
    }

    /// Membership state without consulting the store, for screens that
    /// tolerate a failed reconciliation.
    pub fn detached(session: &SessionHandle) -> Self {
        Self {
            user_id: session.current_user_id(),
            membership: Membership::NotInList,
        }
    }

    pub fn membership(&self) -> Membership {
        self.membership
    }

    pub fn is_in_list(&self) -> bool {
        self.membership == Membership::InList
    }

    /// Flip membership optimistically and mirror the change in the store.
    ///
    /// The local state flips before the write; if the write fails it rolls
    /// back to the prior value, a failure notification is emitted and the
    /// error is returned.
    pub async fn toggle(
        &mut self,
        store: &dyn WatchlistStore,
        notifier: &dyn Notifier,
        movie: &Movie,
    ) -> Result<ToggleOutcome, StoreError> {
        let user_id = match &self.user_id {
            Some(uid) => uid.clone(),
            None => return Ok(ToggleOutcome::SignInRequired),
        };

        let previous = self.membership;
        match previous {
            Membership::NotInList => {
                self.membership = Membership::InList;
                let entry = WatchlistEntry::from_movie(&user_id, movie);
                if let Err(e) = store.insert(&entry).await {
                    warn!(movie_id = movie.id, error = %e, "Watchlist insert failed, rolling back");
                    self.membership = previous;
                    notifier.notify(Notification::failure("Failed to update watchlist"));
                    return Err(e);
                }
                notifier.notify(Notification::success("Added to My List"));
                Ok(ToggleOutcome::Added)
            }
            Membership::InList => {
                self.membership = Membership::NotInList;
                if let Err(e) = store.remove(&user_id, movie.id).await {
                    warn!(movie_id = movie.id, error = %e, "Watchlist delete failed, rolling back");
                    self.membership = previous;
                    notifier.notify(Notification::failure("Failed to update watchlist"));
                    return Err(e);
                }
                notifier.notify(Notification::success("Removed from My List"));
                Ok(ToggleOutcome::Removed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::CollectingNotifier;
    use flickdeck_models::NotificationKind;
    use flickdeck_store::MemoryStore;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            overview: "overview".to_string(),
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: None,
            release_date: "2020-01-01".to_string(),
            vote_average: 7.5,
            genre_ids: vec![28],
            genres: None,
            runtime: None,
            videos: None,
        }
    }

    #[tokio::test]
    async fn test_reconcile_reflects_store_membership() {
        let store = MemoryStore::new();
        let session = SessionHandle::with_user("user-1");
        let m = movie(603, "The Matrix");

        let sync = WatchlistSync::reconcile(&store, &session, m.id).await.unwrap();
        assert_eq!(sync.membership(), Membership::NotInList);

        store
            .insert(&WatchlistEntry::from_movie("user-1", &m))
            .await
            .unwrap();
        let sync = WatchlistSync::reconcile(&store, &session, m.id).await.unwrap();
        assert_eq!(sync.membership(), Membership::InList);
    }

    #[tokio::test]
    async fn test_reconcile_signed_out_makes_no_store_calls() {
        let store = MemoryStore::new();
        let session = SessionHandle::new();

        let sync = WatchlistSync::reconcile(&store, &session, 603).await.unwrap();
        assert_eq!(sync.membership(), Membership::NotInList);
        assert_eq!(store.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_toggle_round_trip_ends_not_in_list_with_no_row() {
        let store = MemoryStore::new();
        let session = SessionHandle::with_user("user-1");
        let notifier = CollectingNotifier::new();
        let m = movie(603, "The Matrix");

        let mut sync = WatchlistSync::reconcile(&store, &session, m.id).await.unwrap();

        let outcome = sync.toggle(&store, &notifier, &m).await.unwrap();
        assert_eq!(outcome, ToggleOutcome::Added);
        assert_eq!(sync.membership(), Membership::InList);
        assert_eq!(store.row_count(), 1);

        let outcome = sync.toggle(&store, &notifier, &m).await.unwrap();
        assert_eq!(outcome, ToggleOutcome::Removed);
        assert_eq!(sync.membership(), Membership::NotInList);
        assert_eq!(store.row_count(), 0);

        let kinds: Vec<NotificationKind> = notifier.take().iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![NotificationKind::Success, NotificationKind::Success]
        );
    }

    #[tokio::test]
    async fn test_unauthenticated_toggle_makes_zero_store_calls() {
        let store = MemoryStore::new();
        let session = SessionHandle::new();
        let notifier = CollectingNotifier::new();
        let m = movie(603, "The Matrix");

        let mut sync = WatchlistSync::reconcile(&store, &session, m.id).await.unwrap();
        let outcome = sync.toggle(&store, &notifier, &m).await.unwrap();

        assert_eq!(outcome, ToggleOutcome::SignInRequired);
        assert_eq!(store.total_calls(), 0);
        assert!(notifier.take().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_rolls_back_on_store_failure() {
        let store = MemoryStore::new();
        let session = SessionHandle::with_user("user-1");
        let notifier = CollectingNotifier::new();
        let m = movie(603, "The Matrix");

        let mut sync = WatchlistSync::reconcile(&store, &session, m.id).await.unwrap();
        store.fail_writes(true);

        let err = sync.toggle(&store, &notifier, &m).await.unwrap_err();
        assert!(matches!(err, StoreError::WriteFailed { .. }));
        // Local state rolled back to its prior value
        assert_eq!(sync.membership(), Membership::NotInList);
        assert_eq!(notifier.last().unwrap().kind, NotificationKind::Failure);

        // Same rollback on the remove side
        store.fail_writes(false);
        sync.toggle(&store, &notifier, &m).await.unwrap();
        assert_eq!(sync.membership(), Membership::InList);
        store.fail_writes(true);

        let err = sync.toggle(&store, &notifier, &m).await.unwrap_err();
        assert!(matches!(err, StoreError::WriteFailed { .. }));
        assert_eq!(sync.membership(), Membership::InList);
    }

    #[tokio::test]
    async fn test_rapid_double_add_leaves_single_row() {
        let store = MemoryStore::new();
        let session = SessionHandle::with_user("user-1");
        let notifier = CollectingNotifier::new();
        let m = movie(603, "The Matrix");

        // Two syncs reconciled before either toggles, as with a rapid
        // double-click across two mounted components
        let mut first = WatchlistSync::reconcile(&store, &session, m.id).await.unwrap();
        let mut second = WatchlistSync::reconcile(&store, &session, m.id).await.unwrap();

        first.toggle(&store, &notifier, &m).await.unwrap();
        // The second insert hits the uniqueness constraint and must not fail
        second.toggle(&store, &notifier, &m).await.unwrap();

        assert_eq!(store.row_count(), 1);
    }
}
