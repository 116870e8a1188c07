//! Thread-safe storage for in-flight and finished attempts.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use super::attempt::UploadAttempt;

/// Shared map of attempts keyed by id.
///
/// Cloning the store is cheap; all clones see the same attempts.
#[derive(Debug, Clone, Default)]
pub struct AttemptStore {
    inner: Arc<RwLock<HashMap<Uuid, UploadAttempt>>>,
}

impl AttemptStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fresh idle attempt and return a copy of it.
    pub fn create(&self) -> UploadAttempt {
        let attempt = UploadAttempt::new();
        self.insert(attempt.clone());
        attempt
    }

    /// Insert or replace an attempt.
    pub fn insert(&self, attempt: UploadAttempt) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.insert(attempt.id(), attempt);
    }

    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<UploadAttempt> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.get(&id).cloned()
    }

    /// Run `f` against the stored attempt, if it still exists.
    pub fn update<R>(&self, id: Uuid, f: impl FnOnce(&mut UploadAttempt) -> R) -> Option<R> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.get_mut(&id).map(f)
    }

    pub fn remove(&self, id: Uuid) -> Option<UploadAttempt> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.remove(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop attempts created more than `retention` ago.
    ///
    /// Attempts still processing are kept whatever their age. Returns the
    /// number of attempts removed.
    pub fn cleanup_expired(&self, retention: Duration) -> usize {
        let now = Utc::now();
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let before = guard.len();
        guard.retain(|_, attempt| {
            attempt.is_processing()
                || !(now - attempt.created_at())
                    .to_std()
                    .is_ok_and(|age| age > retention)
        });
        before - guard.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::attempt::AttemptPhase;
    use crate::extraction::validator::{SelectedFile, UploadValidator};

    #[test]
    fn test_store_lifecycle() {
        let store = AttemptStore::new();
        assert!(store.is_empty());

        let attempt = store.create();
        assert_eq!(store.len(), 1);

        let fetched = store.get(attempt.id()).unwrap();
        assert_eq!(fetched.phase(), AttemptPhase::Idle);

        store.remove(attempt.id());
        assert!(store.is_empty());
        assert!(store.get(attempt.id()).is_none());
    }

    #[test]
    fn test_update_mutates_in_place() {
        let store = AttemptStore::new();
        let id = store.create().id();
        let file = SelectedFile::new("a.pdf", Some("application/pdf"), 10);

        let selected = store
            .update(id, |attempt| attempt.select(file, &UploadValidator::default()))
            .unwrap();
        assert!(selected.is_ok());
        assert_eq!(store.get(id).unwrap().phase(), AttemptPhase::Processing);

        assert!(store.update(Uuid::new_v4(), |_| ()).is_none());
    }

    #[test]
    fn test_cleanup_expired() {
        let store = AttemptStore::new();
        store.create();
        store.create();

        assert_eq!(store.cleanup_expired(Duration::from_secs(60)), 0);
        assert_eq!(store.len(), 2);

        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(store.cleanup_expired(Duration::ZERO), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_cleanup_keeps_processing_attempts() {
        let store = AttemptStore::new();
        let idle = store.create().id();
        let busy = store.create().id();
        let file = SelectedFile::new("a.pdf", Some("application/pdf"), 10);
        store
            .update(busy, |a| a.select(file, &UploadValidator::default()))
            .unwrap()
            .unwrap();
        store.update(busy, |a| a.advance(5));

        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(store.cleanup_expired(Duration::ZERO), 1);

        assert!(store.get(idle).is_none());
        let kept = store.get(busy).unwrap();
        assert_eq!(kept.phase(), AttemptPhase::Processing);
        assert_eq!(kept.progress(), 5);
    }
}
