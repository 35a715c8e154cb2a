//! Persistence port for the saved-channel set. The dashboard talks to a
//! `SavedChannelStore` rather than ambient browser storage, so the engine
//! logic stays testable with an in-memory stub.

use crate::models::SearchResult;

pub const SAVED_CHANNELS_KEY: &str = "niche_saved_channels";

pub trait SavedChannelStore {
    /// Load the persisted set. Missing or malformed data degrades to an
    /// empty set, never an error.
    fn load(&self) -> Vec<SearchResult>;

    /// Overwrite the persisted set with the current one.
    fn save(&self, channels: &[SearchResult]);
}

/// Browser localStorage backend, written synchronously on every change
/// and read once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl SavedChannelStore for LocalStorageStore {
    fn load(&self) -> Vec<SearchResult> {
        let Some(storage) = Self::storage() else {
            return Vec::new();
        };
        let Ok(Some(raw)) = storage.get_item(SAVED_CHANNELS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(channels) => channels,
            Err(e) => {
                log::warn!("Discarding malformed saved channels: {e}");
                Vec::new()
            }
        }
    }

    fn save(&self, channels: &[SearchResult]) {
        let Some(storage) = Self::storage() else {
            return;
        };
        match serde_json::to_string(channels) {
            Ok(serialized) => {
                if storage.set_item(SAVED_CHANNELS_KEY, &serialized).is_err() {
                    log::error!("Failed to persist saved channels");
                }
            }
            Err(e) => log::error!("Failed to serialize saved channels: {e}"),
        }
    }
}

#[cfg(test)]
pub mod memory {
    use std::cell::RefCell;

    use super::*;

    /// In-memory stand-in for localStorage, holding the raw JSON so tests
    /// can also exercise the malformed-data path.
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        raw: RefCell<Option<String>>,
    }

    impl MemoryStore {
        pub fn with_raw(raw: &str) -> Self {
            Self {
                raw: RefCell::new(Some(raw.to_string())),
            }
        }
    }

    impl SavedChannelStore for MemoryStore {
        fn load(&self) -> Vec<SearchResult> {
            match self.raw.borrow().as_deref() {
                Some(raw) => serde_json::from_str(raw).unwrap_or_default(),
                None => Vec::new(),
            }
        }

        fn save(&self, channels: &[SearchResult]) {
            *self.raw.borrow_mut() = Some(serde_json::to_string(channels).unwrap());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;
    use crate::results::toggle_channel;

    fn sample(link: &str) -> SearchResult {
        SearchResult {
            video_link: link.to_string(),
            video_title: "title".to_string(),
            channel_name: "channel".to_string(),
            channel_link: "https://example.com".to_string(),
            thumbnail_url: None,
            view_count: 10,
            like_count: None,
            comment_count: None,
            subscriber_count: 5,
            platform: None,
            niche: None,
            published_at: "2025-08-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::default();
        let channels = vec![sample("a"), sample("b")];
        store.save(&channels);
        assert_eq!(store.load(), channels);
    }

    #[test]
    fn malformed_payload_degrades_to_empty_set() {
        let store = MemoryStore::with_raw("{not json");
        assert!(store.load().is_empty());
    }

    #[test]
    fn toggling_persists_each_mutation() {
        let store = MemoryStore::default();
        let target = sample("x");

        let added = toggle_channel(&store.load(), &target);
        store.save(&added);
        assert_eq!(store.load().len(), 1);

        let removed = toggle_channel(&store.load(), &target);
        store.save(&removed);
        assert!(store.load().is_empty());
    }
}
