use std::collections::HashSet;

use async_trait::async_trait;
use log::{info, warn};

use crate::error::CatalogError;

/// Signed-in user's saved quotes
#[async_trait(?Send)]
pub trait FavoriteStore {
    async fn favorite_ids(&self) -> Result<Vec<i64>, CatalogError>;
    async fn add_favorite(&self, quote_id: i64) -> Result<(), CatalogError>;
    async fn remove_favorite(&self, quote_id: i64) -> Result<(), CatalogError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added(i64),
    Removed(i64),
}

/// Favorite ids known for the current session
///
/// Anonymous sessions have no favorites at all, which is different from a
/// signed-in user with an empty set: rows then show no star instead of an
/// empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Option<HashSet<i64>>,
}

impl Favorites {
    pub fn anonymous() -> Self {
        Self { ids: None }
    }

    pub fn signed_in(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            ids: Some(ids.into_iter().collect()),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.ids.is_some()
    }

    /// `None` for anonymous sessions
    pub fn is_favorite(&self, quote_id: i64) -> Option<bool> {
        self.ids.as_ref().map(|ids| ids.contains(&quote_id))
    }

    pub fn apply(&mut self, change: FavoriteChange) {
        if let Some(ids) = self.ids.as_mut() {
            match change {
                FavoriteChange::Added(id) => {
                    ids.insert(id);
                }
                FavoriteChange::Removed(id) => {
                    ids.remove(&id);
                }
            }
        }
    }
}

/// Load favorite ids when signed in; anonymous sessions skip the request
pub async fn load_favorites<S: FavoriteStore + ?Sized>(
    store: &S,
    signed_in: bool,
) -> Result<Favorites, CatalogError> {
    if !signed_in {
        return Ok(Favorites::anonymous());
    }
    let ids = store.favorite_ids().await?;
    info!("Loaded {} favorite ids", ids.len());
    Ok(Favorites::signed_in(ids))
}

/// Flip a quote's favorite state on the server
///
/// The caller applies the returned change locally; nothing changes when the
/// request fails.
pub async fn toggle_favorite<S: FavoriteStore + ?Sized>(
    store: &S,
    quote_id: i64,
    currently_favorite: bool,
) -> Result<FavoriteChange, CatalogError> {
    let result = if currently_favorite {
        store.remove_favorite(quote_id).await.map(|_| FavoriteChange::Removed(quote_id))
    } else {
        store.add_favorite(quote_id).await.map(|_| FavoriteChange::Added(quote_id))
    };
    if let Err(e) = &result {
        warn!("Failed to toggle favorite {}: {}", quote_id, e);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeStore {
        ids: RefCell<Vec<i64>>,
        offline: bool,
    }

    #[async_trait(?Send)]
    impl FavoriteStore for FakeStore {
        async fn favorite_ids(&self) -> Result<Vec<i64>, CatalogError> {
            Ok(self.ids.borrow().clone())
        }

        async fn add_favorite(&self, quote_id: i64) -> Result<(), CatalogError> {
            if self.offline {
                return Err(CatalogError::Network("offline".to_string()));
            }
            self.ids.borrow_mut().push(quote_id);
            Ok(())
        }

        async fn remove_favorite(&self, quote_id: i64) -> Result<(), CatalogError> {
            self.ids.borrow_mut().retain(|id| *id != quote_id);
            Ok(())
        }
    }

    #[test]
    fn test_anonymous_has_no_state() {
        let mut favorites = Favorites::anonymous();
        assert_eq!(favorites.is_favorite(1), None);
        favorites.apply(FavoriteChange::Added(1));
        assert_eq!(favorites.is_favorite(1), None);
    }

    #[tokio::test]
    async fn test_toggle_round_trip() {
        let store = FakeStore {
            ids: RefCell::new(vec![3]),
            offline: false,
        };
        let mut favorites = load_favorites(&store, true).await.unwrap();
        assert_eq!(favorites.is_favorite(3), Some(true));
        assert_eq!(favorites.is_favorite(4), Some(false));

        let change = toggle_favorite(&store, 4, false).await.unwrap();
        favorites.apply(change);
        assert_eq!(favorites.is_favorite(4), Some(true));

        let change = toggle_favorite(&store, 3, true).await.unwrap();
        favorites.apply(change);
        assert_eq!(favorites.is_favorite(3), Some(false));
        assert_eq!(*store.ids.borrow(), vec![4]);
    }

    #[tokio::test]
    async fn test_anonymous_skips_request() {
        let store = FakeStore::default();
        let favorites = load_favorites(&store, false).await.unwrap();
        assert!(!favorites.is_signed_in());
    }

    #[tokio::test]
    async fn test_failed_toggle_changes_nothing() {
        let store = FakeStore {
            ids: RefCell::new(vec![]),
            offline: true,
        };
        let favorites = Favorites::signed_in(vec![]);
        assert!(toggle_favorite(&store, 8, false).await.is_err());
        assert_eq!(favorites.is_favorite(8), Some(false));
    }
}
