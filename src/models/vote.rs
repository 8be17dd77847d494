//! Vote models: the stored record and the derived state shown to the user.

use serde::{Deserialize, Serialize};

/// Vote polarity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn opposite(&self) -> Self {
        match self {
            VoteDirection::Up => VoteDirection::Down,
            VoteDirection::Down => VoteDirection::Up,
        }
    }
}

/// Record stored under `newsVote_<itemId>`. A missing flag reads as unset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct StoredVote {
    pub upvoted: bool,
    pub downvoted: bool,
}

impl StoredVote {
    pub fn is_active(&self, direction: VoteDirection) -> bool {
        match direction {
            VoteDirection::Up => self.upvoted,
            VoteDirection::Down => self.downvoted,
        }
    }

    fn set(&mut self, direction: VoteDirection, active: bool) {
        match direction {
            VoteDirection::Up => self.upvoted = active,
            VoteDirection::Down => self.downvoted = active,
        }
    }

    /// Toggle `direction`, clearing the opposite vote when switching sides.
    pub fn toggled(mut self, direction: VoteDirection) -> Self {
        if self.is_active(direction) {
            self.set(direction, false);
        } else {
            self.set(direction.opposite(), false);
            self.set(direction, true);
        }
        self
    }

    /// A record with both flags set can only come from a corrupted store.
    pub fn is_consistent(&self) -> bool {
        !(self.upvoted && self.downvoted)
    }
}

/// Vote state for one item as displayed: flags plus derived counts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoteState {
    pub upvoted: bool,
    pub downvoted: bool,
    pub upvotes: i64,
    pub downvotes: i64,
}

impl VoteState {
    /// Initial catalog counts adjusted by this device's stored vote.
    pub fn derive(initial_upvotes: i64, initial_downvotes: i64, vote: StoredVote) -> Self {
        Self {
            upvoted: vote.upvoted,
            downvoted: vote.downvoted,
            upvotes: initial_upvotes + i64::from(vote.upvoted),
            downvotes: initial_downvotes + i64::from(vote.downvoted),
        }
    }

    pub fn net_score(&self) -> i64 {
        self.upvotes - self.downvotes
    }
}

/// Request body for casting a vote.
#[derive(Debug, Clone, Deserialize)]
pub struct VoteRequest {
    pub direction: VoteDirection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_direction_clears_it() {
        let vote = StoredVote::default().toggled(VoteDirection::Up);
        assert!(vote.upvoted);
        assert_eq!(vote.toggled(VoteDirection::Up), StoredVote::default());
    }

    #[test]
    fn test_switching_direction_clears_opposite() {
        let vote = StoredVote::default()
            .toggled(VoteDirection::Up)
            .toggled(VoteDirection::Down);
        assert!(!vote.upvoted);
        assert!(vote.downvoted);
    }

    #[test]
    fn test_toggle_never_produces_both_flags() {
        let sequence = [
            VoteDirection::Up,
            VoteDirection::Up,
            VoteDirection::Down,
            VoteDirection::Up,
            VoteDirection::Down,
            VoteDirection::Down,
            VoteDirection::Down,
        ];
        let mut vote = StoredVote::default();
        for direction in sequence {
            vote = vote.toggled(direction);
            assert!(vote.is_consistent());
        }
    }

    #[test]
    fn test_derived_counts() {
        let state = VoteState::derive(
            42,
            3,
            StoredVote {
                upvoted: false,
                downvoted: true,
            },
        );
        assert_eq!(state.upvotes, 42);
        assert_eq!(state.downvotes, 4);
        assert_eq!(state.net_score(), 38);
    }

    #[test]
    fn test_stored_vote_wire_shape() {
        let json = serde_json::to_value(StoredVote {
            upvoted: true,
            downvoted: false,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "upvoted": true, "downvoted": false }));
    }

    #[test]
    fn test_partial_record_keeps_its_flag() {
        let vote: StoredVote = serde_json::from_str(r#"{"upvoted":true}"#).unwrap();
        assert!(vote.upvoted);
        assert!(!vote.downvoted);

        let vote: StoredVote = serde_json::from_str("{}").unwrap();
        assert_eq!(vote, StoredVote::default());
    }
}
