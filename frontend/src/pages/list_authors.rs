use catalog_domain::historical_date::format;
use catalog_domain::listing::author_catalog;
use catalog_domain::nationality::NationalityPicker;
use catalog_domain::CatalogConfig;
use shared::{AuthorRecord, Country};
use yew::prelude::*;

use super::list_quotes::{filter_input, list_pagination};
use crate::components::nationality_picker::NationalityPickerView;
use crate::hooks::use_record_list::use_record_list;
use crate::services::api::ApiClient;

const NATIONALITY_FILTER: &str = "nationality";

#[derive(Properties, PartialEq)]
pub struct ListAuthorsProps {
    pub api_client: ApiClient,
    pub config: CatalogConfig,
    /// Fired with the author's name to show their quotes
    pub on_select_author: Callback<String>,
}

fn flags(author: &AuthorRecord) -> Html {
    [&author.nationality_primary, &author.nationality_secondary]
        .into_iter()
        .filter(|code| !code.is_empty())
        .map(|code| {
            html! { <img class="flag small" src={Country::flag_url(code, 20)} alt={code.clone()} /> }
        })
        .collect()
}

#[function_component(ListAuthors)]
pub fn list_authors(props: &ListAuthorsProps) -> Html {
    let locale = props.config.locale;
    let list = {
        let size = props.config.default_page_size;
        use_record_list(&props.api_client.authors(), move || author_catalog(size))
    };

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

    let on_nationality = {
        let list = list.clone();
        Callback::from(move |code: String| {
            list.update(|l| {
                let mut picker = NationalityPicker::from_codes(l.filter(NATIONALITY_FILTER), "");
                picker.toggle_single(&code);
                l.set_filter(NATIONALITY_FILTER, &picker.as_filter().unwrap_or_default());
                l.search();
                true
            })
        })
    };

    let on_sort_name = {
        let list = list.clone();
        Callback::from(move |_: MouseEvent| {
            list.update(|l| {
                l.toggle_sort("name");
                true
            })
        })
    };

    let (authors, picker, indicator, error) = list.with(|l| {
        (
            l.items().to_vec(),
            NationalityPicker::from_codes(l.filter(NATIONALITY_FILTER), ""),
            l.sort_indicator("name"),
            l.error_message(locale),
        )
    });

    let rows = authors.into_iter().map(|author| {
        let onclick = {
            let name = author.name.clone();
            props.on_select_author.reform(move |_: MouseEvent| name.clone())
        };
        html! {
            <tr key={author.id}>
                <td class="author-link" {onclick}>{author.name.clone()}</td>
                <td>{format(&author.birth_date_info, locale)}</td>
                <td>{format(&author.death_date_info, locale)}</td>
                <td>{flags(&author)}</td>
            </tr>
        }
    });

    html! {
        <div class="list-authors">
            <form class="filters" onsubmit={on_search}>
                {filter_input(&list, "name", "Imię i nazwisko")}
                <button type="submit">{"Szukaj"}</button>
            </form>
            <NationalityPickerView
                api_client={props.api_client.clone()}
                {picker}
                on_toggle={on_nationality}
                suggestion_limit={props.config.country_suggestion_limit}
            />

            if let Some(message) = error {
                <div class="error">{message}</div>
            } else {
                <table class="author-table">
                    <thead>
                        <tr>
                            <th class="sortable" onclick={on_sort_name}>{format!("Autor{}", indicator)}</th>
                            <th>{"Urodzony"}</th>
                            <th>{"Zmarły"}</th>
                            <th>{"Narodowość"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows }
                    </tbody>
                </table>
            }

            {list_pagination(&list, &props.config.page_size_options)}
        </div>
    }
}
