use catalog_domain::historical_date::format_optional;
use catalog_domain::Locale;
use shared::QuoteOfDay;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub api_client: ApiClient,
    pub locale: Locale,
}

#[derive(Clone, PartialEq)]
enum QuoteOfDayState {
    Loading,
    Ready(Option<QuoteOfDay>),
    Failed(String),
}

/// Landing page with today's quote
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let state = use_state(|| QuoteOfDayState::Loading);
    let is_mounted = use_mut_ref(|| true);

    {
        let state = state.clone();
        let api_client = props.api_client.clone();
        let locale = props.locale;
        let is_mounted = is_mounted.clone();
        use_effect_with((), move |_| {
            {
                let is_mounted = is_mounted.clone();
                spawn_local(async move {
                    let next = match api_client.quote_of_day().await {
                        Ok(quote) => QuoteOfDayState::Ready(quote),
                        Err(e) => QuoteOfDayState::Failed(e.user_message(locale)),
                    };
                    if *is_mounted.borrow() {
                        state.set(next);
                    }
                });
            }
            move || *is_mounted.borrow_mut() = false
        });
    }

    let body = match &*state {
        QuoteOfDayState::Loading => html! { <div class="loading">{"Ładowanie..."}</div> },
        QuoteOfDayState::Failed(message) => html! { <div class="error">{message.clone()}</div> },
        QuoteOfDayState::Ready(None) => html! { <p>{"Brak cytatu dnia."}</p> },
        QuoteOfDayState::Ready(Some(qod)) => html! {
            <blockquote class="quote-of-day">
                <p>{format!("„{}”", qod.quote.text)}</p>
                <footer>
                    {qod.quote.author_name().to_string()}
                    <span class="quote-date">{format_optional(qod.quote.quote_date_info.as_ref(), props.locale)}</span>
                </footer>
                <small>{qod.quote_date.format("%d.%m.%Y").to_string()}</small>
            </blockquote>
        },
    };

    html! {
        <div class="home">
            <h2>{"Cytat dnia"}</h2>
            {body}
        </div>
    }
}
