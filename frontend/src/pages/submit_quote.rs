use catalog_domain::quote_form::QuoteSubmission;
use catalog_domain::record_form::Submission;
use catalog_domain::session::{SessionState, SubmitTarget};
use catalog_domain::CatalogConfig;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::quote_form::QuoteFormView;
use crate::hooks::use_toast::UseToastActions;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct SubmitQuoteProps {
    pub api_client: ApiClient,
    pub config: CatalogConfig,
    pub session: SessionState,
    pub toast: UseToastActions,
}

#[function_component(SubmitQuote)]
pub fn submit_quote(props: &SubmitQuoteProps) -> Html {
    let form_key = use_state(|| 0u32);

    let on_submit = {
        let api_client = props.api_client.clone();
        let toast = props.toast.clone();
        let form_key = form_key.clone();
        let locale = props.config.locale;
        Callback::from(move |submission: Submission<QuoteSubmission>| {
            let api_client = api_client.clone();
            let toast = toast.clone();
            let form_key = form_key.clone();
            spawn_local(async move {
                match submission.send(&api_client.quotes()).await {
                    Ok(()) => {
                        toast.success("Cytat został przesłany do moderacji!");
                        form_key.set(*form_key + 1);
                    }
                    Err(e) => {
                        Logger::error_with_component("submit-quote", &format!("Quote submission failed: {}", e));
                        toast.error(e.user_message(locale));
                    }
                }
            });
        })
    };

    if props.session.submit_target() == SubmitTarget::LoginRequired {
        return html! { <div class="info">{"Zaloguj się, aby dodać cytat."}</div> };
    }

    html! {
        <div class="submit-quote">
            <h2>{"Dodaj cytat"}</h2>
            <QuoteFormView
                key={*form_key}
                api_client={props.api_client.clone()}
                config={props.config.clone()}
                {on_submit}
            />
        </div>
    }
}
