use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{NewPlayer, Player};

/// In-memory player collection shared by all request handlers.
///
/// Clones share the same underlying state, so it can be handed to the router
/// the same way a connection pool would be.
#[derive(Debug, Clone, Default)]
pub struct PlayerStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug)]
struct Inner {
    /// Insertion order is list order
    players: Vec<Player>,
    /// id -> position in `players`
    index: HashMap<i64, usize>,
    next_id: i64,
}

impl Default for Inner {
    fn default() -> Self {
        Inner {
            players: Vec::new(),
            index: HashMap::new(),
            next_id: 1,
        }
    }
}

impl PlayerStore {
    /// Empty store; the first created player gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding Alice, Bob and Charlie (ids 1-3); the next id is 4.
    pub fn seeded() -> Self {
        let store = Self::new();
        for (name, score) in [("Alice", 1200), ("Bob", 950), ("Charlie", 1500)] {
            store.insert(NewPlayer {
                name: name.to_string(),
                score: score.into(),
            });
        }
        store
    }

    pub fn all(&self) -> Vec<Player> {
        self.read().players.clone()
    }

    pub fn get(&self, id: i64) -> Option<Player> {
        let inner = self.read();
        inner.index.get(&id).map(|&pos| inner.players[pos].clone())
    }

    /// Assigns the next id and appends the player.
    ///
    /// Id allocation, counter increment and append happen under one write
    /// guard, so concurrent inserts never share an id and list order matches
    /// id order.
    pub fn insert(&self, new: NewPlayer) -> Player {
        let mut inner = self.write();

        let id = inner.next_id;
        inner.next_id += 1;

        let player = Player::new(id, new.name, new.score);

        let pos = inner.players.len();
        inner.players.push(player.clone());
        inner.index.insert(id, pos);

        player
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.read().players.len()
    }

    // No critical section leaves `Inner` half-updated, so a poisoned lock is
    // safe to keep using.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn new_player(name: &str, score: i64) -> NewPlayer {
        NewPlayer {
            name: name.to_string(),
            score: score.into(),
        }
    }

    #[test]
    fn seeded_store_has_three_players_in_order() {
        let store = PlayerStore::seeded();
        assert_eq!(
            store.all(),
            vec![
                Player::new(1, "Alice", 1200),
                Player::new(2, "Bob", 950),
                Player::new(3, "Charlie", 1500),
            ]
        );
    }

    #[test]
    fn get_finds_seeded_and_misses_unknown() {
        let store = PlayerStore::seeded();
        assert_eq!(store.get(2), Some(Player::new(2, "Bob", 950)));
        assert_eq!(store.get(0), None);
        assert_eq!(store.get(99), None);
        assert_eq!(store.get(-1), None);
    }

    #[test]
    fn insert_uses_post_increment_ids() {
        let store = PlayerStore::seeded();
        let dana = store.insert(new_player("Dana", 1100));
        let eve = store.insert(new_player("Eve", 800));
        let frank = store.insert(new_player("Frank", 700));

        assert_eq!((dana.id, eve.id, frank.id), (4, 5, 6));
        assert_eq!(store.get(4), Some(dana));
        assert_eq!(store.all().last(), Some(&frank));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn empty_store_starts_at_one() {
        let store = PlayerStore::new();
        assert_eq!(store.len(), 0);
        assert_eq!(store.insert(new_player("Solo", 1)).id, 1);
    }

    #[test]
    fn clones_share_state() {
        let store = PlayerStore::seeded();
        let handle = store.clone();
        handle.insert(new_player("Dana", 1100));
        assert_eq!(store.len(), 4);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_get_unique_ordered_ids() {
        let store = PlayerStore::seeded();

        let tasks: Vec<_> = (0..200)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(new_player(&format!("p{i}"), i)) })
            })
            .collect();

        let mut ids = HashSet::new();
        for task in tasks {
            assert!(ids.insert(task.await.unwrap().id));
        }
        assert_eq!(ids.len(), 200);

        let listed: Vec<i64> = store.all().iter().map(|p| p.id).collect();
        assert_eq!(listed, (1..=203).collect::<Vec<_>>());
    }
}
