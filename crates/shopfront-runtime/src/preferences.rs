use shopfront_types::{FavoritesSet, ProductId, Theme};

use crate::storage::KeyValueStore;

/// Store key holding the theme as `"light"` or `"dark"`
pub const THEME_KEY: &str = "theme";

/// Store key holding favorites as a JSON array of ids
pub const FAVORITES_KEY: &str = "favorites";

/// Theme and favorites, loaded once and written through on every change.
///
/// Storage failures never surface: reads fall back to defaults and writes
/// keep the in-memory value so the session stays usable.
#[derive(Debug)]
pub struct Preferences<S: KeyValueStore> {
    store: S,
    theme: Theme,
    favorites: FavoritesSet,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn load(store: S) -> Self {
        let theme = match store.get(THEME_KEY) {
            Ok(raw) => Theme::from_stored(raw.as_deref()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read theme, using light");
                Theme::default()
            }
        };

        let favorites = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => FavoritesSet::from_json(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored favorites are corrupt, starting empty");
                FavoritesSet::new()
            }),
            Ok(None) => FavoritesSet::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read favorites, starting empty");
                FavoritesSet::new()
            }
        };

        Self {
            store,
            theme,
            favorites,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            tracing::warn!(error = %e, theme = %theme, "failed to persist theme");
        }
    }

    /// Flip light/dark and persist; returns the new theme
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.contains(id)
    }

    /// Add or remove `id` and persist; returns whether it is now a favorite
    pub fn toggle_favorite(&mut self, id: ProductId) -> bool {
        let now_favorite = self.favorites.toggle(id);
        match self.favorites.to_json() {
            Ok(raw) => {
                if let Err(e) = self.store.set(FAVORITES_KEY, &raw) {
                    tracing::warn!(error = %e, product = %id, "failed to persist favorites");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to encode favorites"),
        }
        now_favorite
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError};

    /// Store whose reads and writes always fail
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disabled".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("read-only".to_string()))
        }
    }

    #[test]
    fn test_defaults_on_empty_store() {
        let prefs = Preferences::load(MemoryStore::new());
        assert_eq!(prefs.theme(), Theme::Light);
        assert!(prefs.favorites().is_empty());
    }

    #[test]
    fn test_loads_stored_values() {
        let store = MemoryStore::new()
            .with_entry(THEME_KEY, "dark")
            .with_entry(FAVORITES_KEY, "[2,7]");
        let prefs = Preferences::load(store);

        assert_eq!(prefs.theme(), Theme::Dark);
        assert!(prefs.is_favorite(ProductId::new(2)));
        assert!(prefs.is_favorite(ProductId::new(7)));
        assert!(!prefs.is_favorite(ProductId::new(3)));
    }

    #[test]
    fn test_unknown_theme_value_reads_as_light() {
        let prefs = Preferences::load(MemoryStore::new().with_entry(THEME_KEY, "sepia"));
        assert_eq!(prefs.theme(), Theme::Light);
    }

    #[test]
    fn test_corrupt_favorites_read_as_empty() {
        let prefs = Preferences::load(MemoryStore::new().with_entry(FAVORITES_KEY, "not json"));
        assert!(prefs.favorites().is_empty());
    }

    #[test]
    fn test_toggle_theme_writes_through() {
        let mut prefs = Preferences::load(MemoryStore::new());

        assert_eq!(prefs.toggle_theme(), Theme::Dark);
        assert_eq!(prefs.store().get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        assert_eq!(prefs.toggle_theme(), Theme::Light);
        assert_eq!(prefs.store().get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_favorite_twice_restores_set() {
        let mut prefs = Preferences::load(MemoryStore::new().with_entry(FAVORITES_KEY, "[1]"));

        assert!(prefs.toggle_favorite(ProductId::new(4)));
        assert_eq!(
            prefs.store().get(FAVORITES_KEY).unwrap().as_deref(),
            Some("[1,4]")
        );

        assert!(!prefs.toggle_favorite(ProductId::new(4)));
        assert_eq!(
            prefs.store().get(FAVORITES_KEY).unwrap().as_deref(),
            Some("[1]")
        );
    }

    #[test]
    fn test_broken_store_keeps_session_usable() {
        let mut prefs = Preferences::load(BrokenStore);
        assert_eq!(prefs.theme(), Theme::Light);

        assert_eq!(prefs.toggle_theme(), Theme::Dark);
        assert_eq!(prefs.theme(), Theme::Dark);

        assert!(prefs.toggle_favorite(ProductId::new(9)));
        assert!(prefs.is_favorite(ProductId::new(9)));
    }
}
