//! The user's favorite activities, persisted in local storage.
//!
//! The whole list is written back after every change and read once on load.
//! A missing or corrupted payload starts an empty list.

use crate::filter;
use crate::storage::{LocalStorage, StorageError};
use crate::types::Activity;

/// Storage key the favorites list lives under.
pub const FAVORITES_KEY: &str = "favorites";

/// Ordered set of favorite activities keyed by id.
pub struct FavoritesStore<S: LocalStorage> {
    storage: S,
    favorites: Vec<Activity>,
}

impl<S: LocalStorage> FavoritesStore<S> {
    /// Load favorites from storage, falling back to an empty list on any problem.
    pub fn load(storage: S) -> Self {
        let favorites = match storage.get_item(FAVORITES_KEY) {
            Ok(Some(raw)) => Self::parse(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::error!("Error loading favorites from storage: {}", e);
                Vec::new()
            }
        };

        tracing::debug!(count = favorites.len(), "Loaded favorites");
        Self { storage, favorites }
    }

    fn parse(raw: &str) -> Vec<Activity> {
        let parsed: Vec<Activity> = match serde_json::from_str(raw) {
            Ok(list) => list,
            Err(e) => {
                tracing::error!("Error loading favorites from storage: {}", e);
                return Vec::new();
            }
        };

        // A hand-edited file may repeat ids; keep the first of each
        let mut unique: Vec<Activity> = Vec::with_capacity(parsed.len());
        for activity in parsed {
            if unique.iter().any(|a| a.id == activity.id) {
                tracing::warn!(id = %activity.id, "Dropping duplicate favorite");
                continue;
            }
            unique.push(activity);
        }
        unique
    }

    fn persist(&self) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(&self.favorites).map_err(|source| StorageError::Serialize {
                key: FAVORITES_KEY.to_string(),
                source,
            })?;
        self.storage.set_item(FAVORITES_KEY, &json)
    }

    /// Add an activity. Returns `false` without writing if it is already a favorite.
    ///
    /// On a storage failure the in-memory list is left as it was.
    pub fn add(&mut self, activity: Activity) -> Result<bool, StorageError> {
        if self.is_favorite(&activity.id) {
            return Ok(false);
        }

        tracing::info!(id = %activity.id, name = %activity.name, "Adding favorite");
        self.favorites.push(activity);
        if let Err(e) = self.persist() {
            self.favorites.pop();
            return Err(e);
        }
        Ok(true)
    }

    /// Remove by id. Returns `false` without writing if the id isn't a favorite.
    ///
    /// On a storage failure the in-memory list is left as it was.
    pub fn remove(&mut self, id: &str) -> Result<bool, StorageError> {
        let Some(pos) = self.favorites.iter().position(|a| a.id == id) else {
            return Ok(false);
        };

        tracing::info!(id, "Removing favorite");
        let removed = self.favorites.remove(pos);
        if let Err(e) = self.persist() {
            self.favorites.insert(pos, removed);
            return Err(e);
        }
        Ok(true)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|a| a.id == id)
    }

    /// Favorites in the order they were added.
    pub fn favorites(&self) -> &[Activity] {
        &self.favorites
    }

    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.favorites.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Unique tags across all favorites, in first-seen order.
    pub fn all_tags(&self) -> Vec<String> {
        filter::unique_tags(&self.favorites)
    }

    /// Favorites carrying `tag`, or all of them when `tag` is `None`.
    pub fn filter_by_tag(&self, tag: Option<&str>) -> Vec<&Activity> {
        filter::filter_by_tag(&self.favorites, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::types::sample;
    use std::sync::Arc;

    /// Storage whose writes always fail.
    struct ReadOnlyStorage;

    impl LocalStorage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    fn stored(storage: &MemoryStorage) -> Vec<Activity> {
        let raw = storage.get_item(FAVORITES_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_empty_when_nothing_stored() {
        let store = FavoritesStore::load(MemoryStorage::new());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_persists_whole_list() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = FavoritesStore::load(storage.clone());

        assert!(store.add(sample("a", &["Food"])).unwrap());
        assert!(store.add(sample("b", &["Outdoor"])).unwrap());

        let saved = stored(&storage);
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].id, "a");
        assert_eq!(saved[1].id, "b");
    }

    #[test]
    fn test_add_same_id_twice_keeps_size() {
        let mut store = FavoritesStore::load(MemoryStorage::new());
        assert!(store.add(sample("a", &[])).unwrap());
        assert!(!store.add(sample("a", &["Different"])).unwrap());
        assert_eq!(store.len(), 1);
        // First version wins
        assert!(store.get("a").unwrap().tags.is_empty());
    }

    #[test]
    fn test_remove_non_member_is_noop() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = FavoritesStore::load(storage.clone());
        store.add(sample("a", &[])).unwrap();

        assert!(!store.remove("zzz").unwrap());
        assert_eq!(store.len(), 1);
        assert!(store.is_favorite("a"));
    }

    #[test]
    fn test_remove_member() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = FavoritesStore::load(storage.clone());
        store.add(sample("a", &[])).unwrap();
        store.add(sample("b", &[])).unwrap();

        assert!(store.remove("a").unwrap());
        assert!(!store.is_favorite("a"));
        assert_eq!(stored(&storage).len(), 1);
    }

    #[test]
    fn test_survives_reload() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let mut store = FavoritesStore::load(storage.clone());
            store.add(sample("a", &["Food"])).unwrap();
            store.add(sample("b", &["Nature"])).unwrap();
        }

        let reloaded = FavoritesStore::load(storage);
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.is_favorite("a"));
        assert!(reloaded.is_favorite("b"));
    }

    #[test]
    fn test_corrupted_payload_starts_empty() {
        let storage = MemoryStorage::with_item(FAVORITES_KEY, "{not json");
        let store = FavoritesStore::load(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_wrong_shape_payload_starts_empty() {
        let storage = MemoryStorage::with_item(FAVORITES_KEY, r#"{"favorites": []}"#);
        let store = FavoritesStore::load(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicate_ids_in_storage_are_dropped() {
        let list = vec![sample("a", &["One"]), sample("a", &["Two"]), sample("b", &[])];
        let storage =
            MemoryStorage::with_item(FAVORITES_KEY, &serde_json::to_string(&list).unwrap());

        let store = FavoritesStore::load(storage);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a").unwrap().tags, vec!["One"]);
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let mut store = FavoritesStore::load(ReadOnlyStorage);
        assert!(store.add(sample("a", &[])).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_tags_and_filter() {
        let mut store = FavoritesStore::load(MemoryStorage::new());
        store.add(sample("a", &["Food", "Indoor"])).unwrap();
        store.add(sample("b", &["Outdoor", "Food"])).unwrap();

        assert_eq!(store.all_tags(), vec!["Food", "Indoor", "Outdoor"]);
        assert_eq!(store.filter_by_tag(Some("Outdoor")).len(), 1);
        assert_eq!(store.filter_by_tag(Some("Food")).len(), 2);
        assert_eq!(store.filter_by_tag(None).len(), 2);
    }
}
