//! Per-item vote state persisted under `newsVote_<itemId>`.
//!
//! Only the two flags are stored. Displayed counts are always recomputed from the
//! catalog's initial counts, so repeated toggles can never drift or double-count.

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{NewsItem, StoredVote, VoteDirection, VoteState};
use crate::storage::{keys, read_json, write_json, KeyValueStore};

#[derive(Clone)]
pub struct VoteStore {
    store: Arc<dyn KeyValueStore>,
}

impl VoteStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored flags for an item; absent or corrupt records read as no vote.
    async fn stored_vote(&self, item_id: &str) -> Result<StoredVote, AppError> {
        let key = keys::vote(item_id);
        let vote: StoredVote = read_json(self.store.as_ref(), &key)
            .await?
            .unwrap_or_default();

        if !vote.is_consistent() {
            tracing::warn!(item_id, "Stored vote has both directions set, ignoring it");
            return Ok(StoredVote::default());
        }
        Ok(vote)
    }

    /// Current vote state for one item.
    pub async fn vote_state(&self, item: &NewsItem) -> Result<VoteState, AppError> {
        let vote = self.stored_vote(&item.id).await?;
        Ok(VoteState::derive(
            item.initial_upvotes,
            item.initial_downvotes,
            vote,
        ))
    }

    /// Current vote state for every item, keyed by id.
    pub async fn vote_states(
        &self,
        items: &[NewsItem],
    ) -> Result<HashMap<String, VoteState>, AppError> {
        let mut states = HashMap::with_capacity(items.len());
        for item in items {
            states.insert(item.id.clone(), self.vote_state(item).await?);
        }
        Ok(states)
    }

    /// Toggle a vote and persist the result.
    pub async fn apply_vote(
        &self,
        item: &NewsItem,
        direction: VoteDirection,
    ) -> Result<VoteState, AppError> {
        let next = self.stored_vote(&item.id).await?.toggled(direction);
        write_json(self.store.as_ref(), &keys::vote(&item.id), &next).await?;

        tracing::info!(
            item_id = %item.id,
            ?direction,
            upvoted = next.upvoted,
            downvoted = next.downvoted,
            "Vote applied"
        );

        Ok(VoteState::derive(
            item.initial_upvotes,
            item.initial_downvotes,
            next,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::Catalog;
    use crate::storage::MemoryStore;

    fn setup() -> (VoteStore, Arc<MemoryStore>, NewsItem) {
        let memory = Arc::new(MemoryStore::new());
        let votes = VoteStore::new(memory.clone());
        let item = Catalog::sample().get("tech-1").cloned().unwrap();
        (votes, memory, item)
    }

    #[tokio::test]
    async fn test_default_state_uses_initial_counts() {
        let (votes, _, item) = setup();
        let state = votes.vote_state(&item).await.unwrap();
        assert_eq!(
            state,
            VoteState {
                upvoted: false,
                downvoted: false,
                upvotes: 42,
                downvotes: 3,
            }
        );
    }

    #[tokio::test]
    async fn test_upvote_twice_restores_counts() {
        let (votes, _, item) = setup();

        let state = votes.apply_vote(&item, VoteDirection::Up).await.unwrap();
        assert!(state.upvoted);
        assert_eq!(state.upvotes, 43);

        let state = votes.apply_vote(&item, VoteDirection::Up).await.unwrap();
        assert!(!state.upvoted);
        assert_eq!(state.upvotes, 42);
        assert_eq!(state.downvotes, 3);
    }

    #[tokio::test]
    async fn test_downvote_twice_restores_counts() {
        let (votes, _, item) = setup();

        votes.apply_vote(&item, VoteDirection::Down).await.unwrap();
        let state = votes.apply_vote(&item, VoteDirection::Down).await.unwrap();
        assert_eq!((state.upvotes, state.downvotes), (42, 3));
        assert!(!state.upvoted && !state.downvoted);
    }

    #[tokio::test]
    async fn test_switching_sides_moves_one_vote() {
        let (votes, _, item) = setup();

        votes.apply_vote(&item, VoteDirection::Up).await.unwrap();
        let state = votes.apply_vote(&item, VoteDirection::Down).await.unwrap();

        assert!(!state.upvoted);
        assert!(state.downvoted);
        assert_eq!(state.upvotes, 42);
        assert_eq!(state.downvotes, 4);
    }

    #[tokio::test]
    async fn test_long_sequence_keeps_invariant() {
        let (votes, _, item) = setup();
        let sequence = [
            VoteDirection::Down,
            VoteDirection::Up,
            VoteDirection::Up,
            VoteDirection::Up,
            VoteDirection::Down,
            VoteDirection::Down,
            VoteDirection::Up,
        ];

        for direction in sequence {
            let state = votes.apply_vote(&item, direction).await.unwrap();
            assert!(!(state.upvoted && state.downvoted));
            assert!(state.upvotes >= item.initial_upvotes);
            assert!(state.upvotes <= item.initial_upvotes + 1);
            assert!(state.downvotes >= item.initial_downvotes);
            assert!(state.downvotes <= item.initial_downvotes + 1);
        }

        // Re-reading gives the same state as the last write
        let last = votes.vote_state(&item).await.unwrap();
        assert!(last.upvoted);
        assert_eq!(last.upvotes, 43);
    }

    #[tokio::test]
    async fn test_vote_is_persisted_under_item_key() {
        let (votes, memory, item) = setup();
        votes.apply_vote(&item, VoteDirection::Down).await.unwrap();

        let raw = memory.get("newsVote_tech-1").await.unwrap().unwrap();
        assert_eq!(raw, r#"{"upvoted":false,"downvoted":true}"#);
    }

    #[tokio::test]
    async fn test_corrupt_records_fall_back_to_no_vote() {
        let (votes, memory, item) = setup();

        memory.set("newsVote_tech-1", "garbage").await.unwrap();
        let state = votes.vote_state(&item).await.unwrap();
        assert_eq!((state.upvotes, state.downvotes), (42, 3));

        memory
            .set("newsVote_tech-1", r#"{"upvoted":true,"downvoted":true}"#)
            .await
            .unwrap();
        let state = votes.vote_state(&item).await.unwrap();
        assert!(!state.upvoted && !state.downvoted);

        // Voting over a corrupt record starts from a clean slate
        let state = votes.apply_vote(&item, VoteDirection::Up).await.unwrap();
        assert!(state.upvoted && !state.downvoted);
    }

    #[tokio::test]
    async fn test_record_missing_a_flag_keeps_the_other() {
        let (votes, memory, item) = setup();

        memory
            .set("newsVote_tech-1", r#"{"upvoted":true}"#)
            .await
            .unwrap();
        let state = votes.vote_state(&item).await.unwrap();
        assert!(state.upvoted && !state.downvoted);
        assert_eq!((state.upvotes, state.downvotes), (43, 3));
    }

    #[tokio::test]
    async fn test_vote_states_for_catalog() {
        let (votes, _, _) = setup();
        let catalog = Catalog::sample();
        let ent = catalog.get("ent-1").unwrap();
        votes.apply_vote(ent, VoteDirection::Down).await.unwrap();

        let states = votes.vote_states(catalog.items()).await.unwrap();
        assert_eq!(states.len(), 4);
        assert_eq!(states["ent-1"].net_score(), 197);
        assert_eq!(states["sports-1"].net_score(), 84);
    }
}
