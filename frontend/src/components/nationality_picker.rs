use catalog_domain::nationality::{basic_countries, countries_from_codes, filter_countries, FlagRank, NationalityPicker};
use shared::Country;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const FLAG_WIDTH: u32 = 40;

#[derive(Properties, PartialEq)]
pub struct NationalityPickerProps {
    pub api_client: ApiClient,
    pub picker: NationalityPicker,
    pub on_toggle: Callback<String>,
    pub suggestion_limit: usize,
}

fn flag(country: &Country, rank: Option<FlagRank>, on_toggle: &Callback<String>) -> Html {
    let onclick = {
        let on_toggle = on_toggle.clone();
        let code = country.code.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(code.clone()))
    };
    let style = format!("border: 3px solid {};", FlagRank::border_color(rank));
    html! {
        <img
            class="flag"
            src={Country::flag_url(&country.code, FLAG_WIDTH)}
            alt={country.name.clone()}
            title={country.name.clone()}
            {style}
            {onclick}
        />
    }
}

/// Basic flags plus a search over every country; at most two selections
#[function_component(NationalityPickerView)]
pub fn nationality_picker_view(props: &NationalityPickerProps) -> Html {
    let all_countries = use_state(Vec::<Country>::new);
    let search_open = use_state(|| false);
    let term = use_state(String::new);

    // Country list is fetched the first time the search opens
    {
        let all_countries = all_countries.clone();
        let api_client = props.api_client.clone();
        use_effect_with(*search_open, move |open| {
            if *open && all_countries.is_empty() {
                spawn_local(async move {
                    match api_client.country_codes().await {
                        Ok(codes) => all_countries.set(countries_from_codes(codes)),
                        Err(e) => Logger::error_with_component(
                            "nationality-picker",
                            &format!("Failed to load country list: {}", e),
                        ),
                    }
                });
            }
            || ()
        });
    }

    let toggle_search = {
        let search_open = search_open.clone();
        Callback::from(move |_: MouseEvent| search_open.set(!*search_open))
    };

    let on_term_input = {
        let term = term.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            term.set(input.value());
        })
    };

    let choose = {
        let on_toggle = props.on_toggle.clone();
        let search_open = search_open.clone();
        let term = term.clone();
        Callback::from(move |code: String| {
            on_toggle.emit(code);
            search_open.set(false);
            term.set(String::new());
        })
    };

    let basic = basic_countries();
    let extra: Vec<Country> = props
        .picker
        .extra_selected()
        .map(|code| {
            all_countries
                .iter()
                .find(|c| c.code == code)
                .cloned()
                .unwrap_or_else(|| Country::new(code, &code.to_uppercase()))
        })
        .collect();

    html! {
        <div class="nationality-picker">
            <div class="flags">
                { for basic.iter().map(|c| flag(c, props.picker.rank(&c.code), &props.on_toggle)) }
                { for extra.iter().map(|c| flag(c, props.picker.rank(&c.code), &props.on_toggle)) }
                <button type="button" class="flag-search-toggle" onclick={toggle_search}>{"+"}</button>
            </div>
            if *search_open {
                <div class="country-search-popup">
                    <input type="text" value={(*term).clone()} oninput={on_term_input} />
                    <div class="country-suggestions">
                        { for filter_countries(&all_countries, &term, props.suggestion_limit).into_iter().map(|c| {
                            let onclick = {
                                let choose = choose.clone();
                                let code = c.code.clone();
                                Callback::from(move |_: MouseEvent| choose.emit(code.clone()))
                            };
                            html! {
                                <div class="country-suggestion" {onclick}>
                                    <img src={Country::flag_url(&c.code, FLAG_WIDTH)} alt={c.name.clone()} />
                                    <span>{c.name.clone()}</span>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            }
        </div>
    }
}
