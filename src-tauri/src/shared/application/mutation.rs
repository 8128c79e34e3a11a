//! Speculative mutations with explicit rollback.
//!
//! Lifecycle mutations apply their predicted entity state to the local
//! store before the request goes out, so the UI reflects the transition
//! immediately. On failure the previous state is restored; on success the
//! next poll reconciles against the server.

use std::future::Future;
use uuid::Uuid;

use crate::shared::errors::AppResult;
use crate::shared::infrastructure::store::{EntityStore, HasId};

/// Apply `predicted` speculatively, run `request`, roll back on failure.
pub async fn speculate<T, R, Fut>(
    store: &EntityStore<T>,
    predicted: T,
    request: Fut,
) -> AppResult<R>
where
    T: Clone + HasId,
    Fut: Future<Output = AppResult<R>>,
{
    let id = predicted.id();
    let previous = store.upsert(predicted);
    match request.await {
        Ok(value) => Ok(value),
        Err(err) => {
            store.restore(id, previous);
            Err(err)
        }
    }
}

/// Remove `id` speculatively, run `request`, re-insert on failure.
pub async fn speculate_removal<T, R, Fut>(
    store: &EntityStore<T>,
    id: Uuid,
    request: Fut,
) -> AppResult<R>
where
    T: Clone + HasId,
    Fut: Future<Output = AppResult<R>>,
{
    let previous = store.remove(id);
    match request.await {
        Ok(value) => Ok(value),
        Err(err) => {
            store.restore(id, previous);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;

    #[derive(Debug, Clone)]
    struct Item {
        id: Uuid,
        state: &'static str,
    }

    impl HasId for Item {
        fn id(&self) -> Uuid {
            self.id
        }
    }

    #[tokio::test]
    async fn test_successful_mutation_keeps_prediction() {
        let store = EntityStore::new();
        let id = Uuid::new_v4();
        store.upsert(Item { id, state: "pending" });

        let result = speculate(&store, Item { id, state: "in_progress" }, async { Ok(()) }).await;

        assert!(result.is_ok());
        assert_eq!(store.get(id).unwrap().state, "in_progress");
    }

    #[tokio::test]
    async fn test_failed_mutation_rolls_back() {
        let store = EntityStore::new();
        let id = Uuid::new_v4();
        store.upsert(Item { id, state: "pending" });

        let result: AppResult<()> = speculate(&store, Item { id, state: "in_progress" }, async {
            Err(AppError::Rejected("Makine bakımda".to_string()))
        })
        .await;

        assert!(result.is_err());
        assert_eq!(store.get(id).unwrap().state, "pending");
    }

    #[tokio::test]
    async fn test_failed_removal_restores_entity() {
        let store = EntityStore::new();
        let id = Uuid::new_v4();
        store.upsert(Item { id, state: "preparing" });

        let result: AppResult<()> = speculate_removal(&store, id, async {
            Err(AppError::Transport("offline".to_string()))
        })
        .await;

        assert!(result.is_err());
        assert!(store.get(id).is_some());
    }
}
