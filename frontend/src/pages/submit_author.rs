use catalog_domain::record_form::Submission;
use catalog_domain::session::{SessionState, SubmitTarget};
use catalog_domain::CatalogConfig;
use shared::AuthorPayload;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::author_form::AuthorFormView;
use crate::hooks::use_toast::UseToastActions;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct SubmitAuthorProps {
    pub api_client: ApiClient,
    pub config: CatalogConfig,
    pub session: SessionState,
    pub toast: UseToastActions,
}

/// New author proposal; it lands in the moderation queue
#[function_component(SubmitAuthor)]
pub fn submit_author(props: &SubmitAuthorProps) -> Html {
    // Bumped after a successful send so the form remounts empty
    let form_key = use_state(|| 0u32);

    let on_submit = {
        let api_client = props.api_client.clone();
        let toast = props.toast.clone();
        let form_key = form_key.clone();
        let locale = props.config.locale;
        Callback::from(move |submission: Submission<AuthorPayload>| {
            let api_client = api_client.clone();
            let toast = toast.clone();
            let form_key = form_key.clone();
            spawn_local(async move {
                match submission.send(&api_client.authors()).await {
                    Ok(()) => {
                        toast.success("Autor został przesłany do moderacji!");
                        form_key.set(*form_key + 1);
                    }
                    Err(e) => {
                        Logger::error_with_component("submit-author", &format!("Author submission failed: {}", e));
                        toast.error(e.user_message(locale));
                    }
                }
            });
        })
    };

    if props.session.submit_target() == SubmitTarget::LoginRequired {
        return html! { <div class="info">{"Zaloguj się, aby dodać autora."}</div> };
    }

    html! {
        <div class="submit-author">
            <h2>{"Dodaj autora"}</h2>
            <AuthorFormView
                key={*form_key}
                api_client={props.api_client.clone()}
                config={props.config.clone()}
                {on_submit}
            />
        </div>
    }
}
