use catalog_domain::favorites::{load_favorites, toggle_favorite, FavoriteChange, Favorites};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, Default, PartialEq)]
struct FavoritesState(Favorites);

enum FavoritesAction {
    Loaded(Favorites),
    Changed(FavoriteChange),
}

impl Reducible for FavoritesState {
    type Action = FavoritesAction;

    fn reduce(self: Rc<Self>, action: FavoritesAction) -> Rc<Self> {
        let next = match action {
            FavoritesAction::Loaded(favorites) => favorites,
            FavoritesAction::Changed(change) => {
                let mut favorites = self.0.clone();
                favorites.apply(change);
                favorites
            }
        };
        Rc::new(FavoritesState(next))
    }
}

pub struct UseFavoritesResult {
    pub favorites: Favorites,
    pub actions: UseFavoritesActions,
}

#[derive(Clone, PartialEq)]
pub struct UseFavoritesActions {
    /// `(quote_id, currently_favorite)`
    pub toggle: Callback<(i64, bool)>,
}

/// Favorite ids for the signed-in user; reloads when the sign-in state flips
///
/// `on_change` fires after the server accepted a toggle.
#[hook]
pub fn use_favorites(api_client: &ApiClient, signed_in: bool, on_change: Callback<FavoriteChange>) -> UseFavoritesResult {
    let state = use_reducer(FavoritesState::default);

    use_effect_with(signed_in, {
        let api_client = api_client.clone();
        let dispatcher = state.dispatcher();
        move |signed_in| {
            let signed_in = *signed_in;
            spawn_local(async move {
                match load_favorites(&api_client, signed_in).await {
                    Ok(loaded) => dispatcher.dispatch(FavoritesAction::Loaded(loaded)),
                    Err(e) => {
                        Logger::error_with_component("favorites", &format!("Failed to load favorites: {}", e));
                        dispatcher.dispatch(FavoritesAction::Loaded(Favorites::anonymous()));
                    }
                }
            });
            || ()
        }
    });

    let toggle = {
        let api_client = api_client.clone();
        let dispatcher = state.dispatcher();
        use_callback(on_change, move |(quote_id, currently): (i64, bool), on_change| {
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            let on_change = on_change.clone();
            spawn_local(async move {
                if let Ok(change) = toggle_favorite(&api_client, quote_id, currently).await {
                    dispatcher.dispatch(FavoritesAction::Changed(change));
                    on_change.emit(change);
                }
            });
        })
    };

    UseFavoritesResult {
        favorites: state.0.clone(),
        actions: UseFavoritesActions { toggle },
    }
}
