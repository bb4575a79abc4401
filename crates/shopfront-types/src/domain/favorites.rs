use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::ProductId;

/// Locally persisted set of favorite product ids.
///
/// Serialized as a JSON array of integers. Membership is the only query
/// the rest of the application relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesSet(BTreeSet<ProductId>);

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.0.contains(&id)
    }

    /// Flip membership of `id` and return whether it is now a favorite
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.0.iter().copied()
    }

    /// Decode the persisted representation. Duplicate ids collapse.
    pub fn from_json(raw: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FromIterator<ProductId> for FavoritesSet {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> ProductId {
        ProductId::new(n)
    }

    #[test]
    fn test_toggle_round_trip_restores_membership() {
        let mut favorites: FavoritesSet = [id(1), id(5)].into_iter().collect();
        let original = favorites.clone();

        assert!(favorites.toggle(id(3)));
        assert!(favorites.contains(id(3)));
        assert!(!favorites.toggle(id(3)));

        assert_eq!(favorites, original);
    }

    #[test]
    fn test_toggle_order_never_duplicates() {
        let mut favorites = FavoritesSet::new();
        for n in [4, 2, 4, 4, 2, 9, 4] {
            favorites.toggle(id(n));
        }

        // 4 toggled four times -> absent, 2 twice -> absent, 9 once -> present
        assert_eq!(favorites.iter().collect::<Vec<_>>(), vec![id(9)]);
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_json_encoding_is_integer_list() {
        let favorites: FavoritesSet = [id(3), id(1)].into_iter().collect();
        assert_eq!(favorites.to_json().unwrap(), "[1,3]");

        let decoded = FavoritesSet::from_json("[7, 7, 2]").unwrap();
        assert_eq!(decoded.len(), 2);
        assert!(decoded.contains(id(7)));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(FavoritesSet::from_json("not json").is_err());
        assert!(FavoritesSet::from_json("[\"a\"]").is_err());
    }
}
