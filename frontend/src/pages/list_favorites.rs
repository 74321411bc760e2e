use catalog_domain::favorites::FavoriteChange;
use catalog_domain::listing::favorite_quotes;
use catalog_domain::session::SessionState;
use catalog_domain::CatalogConfig;
use yew::prelude::*;

use super::list_quotes::list_pagination;
use crate::components::quote_table::QuoteTable;
use crate::hooks::use_favorites::use_favorites;
use crate::hooks::use_record_list::use_record_list;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ListFavoritesProps {
    pub api_client: ApiClient,
    pub config: CatalogConfig,
    pub session: SessionState,
}

/// Saved quotes of the signed-in user; un-starring a row drops it from the page
#[function_component(ListFavorites)]
pub fn list_favorites(props: &ListFavoritesProps) -> Html {
    let locale = props.config.locale;
    let list = {
        let size = props.config.default_page_size;
        use_record_list(&props.api_client.favorites(), move || favorite_quotes(size))
    };

    let on_change = {
        let refresh = list.refresh.clone();
        Callback::from(move |change: FavoriteChange| {
            if let FavoriteChange::Removed(_) = change {
                refresh.emit(());
            }
        })
    };
    let favorites = use_favorites(&props.api_client, props.session.is_signed_in(), on_change);

    let on_sort = {
        let list = list.clone();
        Callback::from(move |field: &'static str| {
            list.update(|l| {
                l.toggle_sort(field);
                true
            })
        })
    };

    if props.session.is_resolved() && !props.session.is_signed_in() {
        return html! { <div class="info">{"Zaloguj się, aby zobaczyć ulubione cytaty."}</div> };
    }

    let (quotes, sort, error) = list.with(|l| (l.items().to_vec(), l.query().sort.clone(), l.error_message(locale)));

    html! {
        <div class="list-favorites">
            <h2>{"Ulubione"}</h2>
            if let Some(message) = error {
                <div class="error">{message}</div>
            } else if quotes.is_empty() {
                <p>{"Brak ulubionych cytatów."}</p>
            } else {
                <QuoteTable
                    {quotes}
                    {locale}
                    {sort}
                    {on_sort}
                    favorites={favorites.favorites}
                    on_toggle_favorite={favorites.actions.toggle}
                />
            }
            {list_pagination(&list, &props.config.page_size_options)}
        </div>
    }
}
