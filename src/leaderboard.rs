//! Persisted high-score list
//!
//! A flat list of at most ten scores, sorted descending, stored as a JSON
//! integer array under the `"scores"` key of the `"leaderboard"` store.
//! Parsing the persisted string is the one fallible boundary in the whole
//! game: malformed or absent data degrades to an empty list with a logged
//! diagnostic and is never surfaced to the player.

use std::io;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_SCORES;
use crate::persistence::KeyValueStore;

/// Store name the leaderboard lives under
pub const STORE_NAME: &str = "leaderboard";
/// Key within the store
pub const SCORES_KEY: &str = "scores";

/// Top-10 descending score list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    scores: Vec<u32>,
}

impl Leaderboard {
    /// Create an empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Highest score, if any
    pub fn top_score(&self) -> Option<u32> {
        self.scores.first().copied()
    }

    /// Whether a score would survive sort-and-truncate
    pub fn qualifies(&self, score: u32) -> bool {
        self.scores.len() < MAX_SCORES || self.scores.last().is_some_and(|&low| score > low)
    }

    /// Insert a score, re-sort descending, truncate to the top ten
    ///
    /// Returns whether the list changed (a tie with the lowest entry that
    /// truncates straight back out is not a change, and needs no write).
    pub fn record(&mut self, score: u32) -> bool {
        let mut candidate = self.scores.clone();
        candidate.push(score);
        candidate.sort_unstable_by(|a, b| b.cmp(a));
        candidate.truncate(MAX_SCORES);
        if candidate == self.scores {
            return false;
        }
        self.scores = candidate;
        true
    }

    /// Load from the store; absent or malformed data yields an empty list
    pub fn load(store: &impl KeyValueStore) -> Self {
        let Some(json) = store.get(SCORES_KEY) else {
            return Self::new();
        };
        match serde_json::from_str::<Vec<u32>>(&json) {
            Ok(scores) => {
                log::info!("loaded {} leaderboard entries", scores.len());
                Self { scores }
            }
            Err(e) => {
                log::warn!("failed to parse leaderboard, starting fresh: {}", e);
                Self::new()
            }
        }
    }

    /// Persist the whole list, replacing the previous value
    pub fn save(&self, store: &mut impl KeyValueStore) -> io::Result<()> {
        let json = serde_json::to_string(&self.scores).map_err(io::Error::other)?;
        store.set(SCORES_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use proptest::prelude::*;

    #[test]
    fn test_first_score_on_empty_board() {
        let mut board = Leaderboard::new();
        assert!(board.record(42));
        assert_eq!(board.scores(), &[42]);
    }

    #[test]
    fn test_sorted_descending_and_truncated() {
        let mut board = Leaderboard::new();
        for score in [5, 30, 1, 12, 7, 19, 3, 25, 8, 14, 2, 40] {
            board.record(score);
        }
        assert_eq!(board.scores().len(), MAX_SCORES);
        assert!(board.scores().windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(board.top_score(), Some(40));
        // 1 and 2 fell off the bottom
        assert!(!board.scores().contains(&1));
        assert!(!board.scores().contains(&2));
    }

    #[test]
    fn test_tie_with_lowest_is_not_a_change() {
        let mut board = Leaderboard::new();
        for score in 1..=10 {
            board.record(score);
        }
        assert_eq!(board.scores().last(), Some(&1));
        assert!(!board.record(1));
        assert!(!board.qualifies(1));
        assert!(board.record(2));
    }

    #[test]
    fn test_load_absent_is_empty() {
        let store = MemoryStore::new();
        assert!(Leaderboard::load(&store).is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let mut store = MemoryStore::new();
        store.set(SCORES_KEY, "not json at all").unwrap();
        assert!(Leaderboard::load(&store).is_empty());
        store.set(SCORES_KEY, "{\"scores\":[1]}").unwrap();
        assert!(Leaderboard::load(&store).is_empty());
    }

    #[test]
    fn test_save_load_roundtrip_is_flat_array() {
        let mut store = MemoryStore::new();
        let mut board = Leaderboard::new();
        board.record(42);
        board.record(7);
        board.save(&mut store).unwrap();
        assert_eq!(store.get(SCORES_KEY).as_deref(), Some("[42,7]"));
        assert_eq!(Leaderboard::load(&store), board);
    }

    proptest! {
        #[test]
        fn prop_invariants_hold(scores in proptest::collection::vec(0u32..10_000, 0..40)) {
            let mut board = Leaderboard::new();
            for &score in &scores {
                let qualified = board.qualifies(score);
                let changed = board.record(score);
                prop_assert!(board.scores().len() <= MAX_SCORES);
                prop_assert!(board.scores().windows(2).all(|w| w[0] >= w[1]));
                if qualified {
                    prop_assert!(board.scores().contains(&score));
                }
                prop_assert_eq!(changed, qualified);
            }
        }
    }
}
