use catalog_domain::historical_date::format;
use catalog_domain::moderation::{approve, reject};
use catalog_domain::record_form::{SecondaryAction, Submission};
use catalog_domain::CatalogConfig;
use shared::AuthorPayload;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::moderation_pagination;
use crate::components::author_form::AuthorFormView;
use crate::hooks::use_moderation_queue::use_moderation_queue;
use crate::hooks::use_toast::UseToastActions;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ModerateAuthorsProps {
    pub api_client: ApiClient,
    pub config: CatalogConfig,
    pub toast: UseToastActions,
}

/// Pending author submissions; the selected one is edited in place, then approved or rejected
#[function_component(ModerateAuthors)]
pub fn moderate_authors(props: &ModerateAuthorsProps) -> Html {
    let locale = props.config.locale;
    let queue = use_moderation_queue(&props.api_client.authors(), props.config.moderation_page_size);

    let on_approve = {
        let api_client = props.api_client.clone();
        let toast = props.toast.clone();
        let queue = queue.clone();
        Callback::from(move |submission: Submission<AuthorPayload>| {
            let api_client = api_client.clone();
            let toast = toast.clone();
            let queue = queue.clone();
            spawn_local(async move {
                match approve(&api_client.authors(), submission).await {
                    Ok(id) => {
                        queue.settle(id);
                        toast.success("Autor został zatwierdzony!");
                    }
                    Err(e) => {
                        Logger::error_with_component("moderate-authors", &format!("Approve failed: {}", e));
                        toast.error(e.user_message(locale));
                    }
                }
            });
        })
    };

    let on_reject = {
        let api_client = props.api_client.clone();
        let toast = props.toast.clone();
        let queue = queue.clone();
        Callback::from(move |id: i64| {
            if !gloo::dialogs::confirm("Czy na pewno chcesz odrzucić tego autora?") {
                return;
            }
            let api_client = api_client.clone();
            let toast = toast.clone();
            let queue = queue.clone();
            spawn_local(async move {
                match reject(&api_client.authors(), SecondaryAction::RejectRequested { id }).await {
                    Ok(id) => {
                        queue.settle(id);
                        toast.success("Autor został odrzucony.");
                    }
                    Err(e) => {
                        Logger::error_with_component("moderate-authors", &format!("Reject failed: {}", e));
                        toast.error(e.user_message(locale));
                    }
                }
            });
        })
    };

    let (authors, target, denied, error) = queue.with(|q| {
        let authors: Vec<_> = q
            .pending()
            .map(|a| (a.clone(), q.is_selected(a.id)))
            .collect();
        let error = q.list().error();
        (
            authors,
            q.selected().cloned(),
            error.is_some_and(|e| e.is_authorization()),
            error.map(|e| e.user_message(locale)),
        )
    });

    if denied {
        return html! { <div class="error banner">{error.unwrap_or_default()}</div> };
    }

    let rows = authors.into_iter().map(|(author, selected)| {
        let onclick = {
            let queue = queue.clone();
            let id = author.id;
            Callback::from(move |_: MouseEvent| queue.select(id))
        };
        html! {
            <tr key={author.id} class={classes!(selected.then_some("selected"))} {onclick}>
                <td>{author.name.clone()}</td>
                <td>{format(&author.birth_date_info, locale)}</td>
                <td>{format(&author.death_date_info, locale)}</td>
            </tr>
        }
    });

    html! {
        <div class="moderate-authors">
            <h2>{"Autorzy do moderacji"}</h2>
            if let Some(message) = error {
                <div class="error">{message}</div>
            }
            <table class="pending-table">
                <tbody>{ for rows }</tbody>
            </table>
            {moderation_pagination(&queue, &props.config.page_size_options)}
            <AuthorFormView
                api_client={props.api_client.clone()}
                config={props.config.clone()}
                {target}
                on_submit={on_approve}
                {on_reject}
            />
        </div>
    }
}
