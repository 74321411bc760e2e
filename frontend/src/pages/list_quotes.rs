use catalog_domain::listing::quote_catalog;
use catalog_domain::period::Period;
use catalog_domain::session::SessionState;
use catalog_domain::CatalogConfig;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::quote_table::QuoteTable;
use crate::hooks::use_favorites::use_favorites;
use crate::hooks::use_record_list::{use_record_list, UseRecordListResult};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ListQuotesProps {
    pub api_client: ApiClient,
    pub config: CatalogConfig,
    pub session: SessionState,
    /// Preset author filter, e.g. when coming from the author list
    #[prop_or_default]
    pub author: Option<String>,
}

/// Text input bound to one list filter
pub fn filter_input<T: 'static>(list: &UseRecordListResult<T>, key: &'static str, placeholder: &'static str) -> Html {
    let value = list.with(|l| l.filter(key).to_string());
    let oninput = {
        let list = list.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            list.update(|l| {
                l.set_filter(key, &input.value());
                false
            });
        })
    };
    html! { <input type="text" {value} {placeholder} {oninput} /> }
}

/// Pagination bar wired to a record list
pub fn list_pagination<T: 'static>(list: &UseRecordListResult<T>, size_options: &[u32]) -> Html {
    let (page, total_pages, size) = list.with(|l| (l.query().page, l.total_pages(), l.query().size));
    let on_prev = {
        let list = list.clone();
        Callback::from(move |_: ()| list.update(|l| l.prev_page()))
    };
    let on_next = {
        let list = list.clone();
        Callback::from(move |_: ()| list.update(|l| l.next_page()))
    };
    let on_size = {
        let list = list.clone();
        Callback::from(move |size: u32| {
            list.update(|l| {
                l.set_size(size);
                true
            })
        })
    };
    html! {
        <Pagination {page} {total_pages} {size} size_options={size_options.to_vec()} {on_prev} {on_next} {on_size} />
    }
}

#[function_component(ListQuotes)]
pub fn list_quotes(props: &ListQuotesProps) -> Html {
    let locale = props.config.locale;
    let list = {
        let size = props.config.default_page_size;
        let author = props.author.clone();
        use_record_list(&props.api_client.quotes(), move || quote_catalog(size, author.as_deref()))
    };
    let favorites = use_favorites(&props.api_client, props.session.is_signed_in(), Callback::noop());

    let on_search = {
        let list = list.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            list.update(|l| {
                l.search();
                true
            });
        })
    };

    let on_clear = {
        let list = list.clone();
        Callback::from(move |_: MouseEvent| {
            list.update(|l| {
                l.clear_filters();
                true
            })
        })
    };

    let on_period = {
        let list = list.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            list.update(|l| {
                l.set_filter("period", &select.value());
                false
            });
        })
    };

    let on_sort = {
        let list = list.clone();
        Callback::from(move |field: &'static str| {
            list.update(|l| {
                l.toggle_sort(field);
                true
            })
        })
    };

    let (quotes, sort, period, loading, error) = list.with(|l| {
        (
            l.items().to_vec(),
            l.query().sort.clone(),
            l.filter("period").to_string(),
            l.is_loading(),
            l.error_message(locale),
        )
    });

    html! {
        <div class="list-quotes">
            <form class="filters" onsubmit={on_search}>
                {filter_input(&list, "text", "Treść")}
                {filter_input(&list, "author", "Autor")}
                <select onchange={on_period}>
                    <option value="" selected={period.is_empty()}>{"Okres"}</option>
                    { for Period::ALL.iter().map(|p| html! {
                        <option value={p.label()} selected={period == p.label()}>{p.label()}</option>
                    }) }
                </select>
                {filter_input(&list, "source", "Źródło")}
                <button type="submit">{"Szukaj"}</button>
                <button type="button" onclick={on_clear}>{"Wyczyść"}</button>
            </form>

            if let Some(message) = error {
                <div class="error">{message}</div>
            } else if loading && quotes.is_empty() {
                <div class="loading">{"Ładowanie..."}</div>
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
