use catalog_domain::historical_date::format_optional;
use catalog_domain::moderation::{approve, reject};
use catalog_domain::quote_form::QuoteSubmission;
use catalog_domain::record_form::{SecondaryAction, Submission};
use catalog_domain::CatalogConfig;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::moderation_pagination;
use crate::components::quote_form::QuoteFormView;
use crate::hooks::use_moderation_queue::use_moderation_queue;
use crate::hooks::use_toast::UseToastActions;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ModerateQuotesProps {
    pub api_client: ApiClient,
    pub config: CatalogConfig,
    pub toast: UseToastActions,
}

#[function_component(ModerateQuotes)]
pub fn moderate_quotes(props: &ModerateQuotesProps) -> Html {
    let locale = props.config.locale;
    let queue = use_moderation_queue(&props.api_client.quotes(), props.config.moderation_page_size);

    let on_approve = {
        let api_client = props.api_client.clone();
        let toast = props.toast.clone();
        let queue = queue.clone();
        Callback::from(move |submission: Submission<QuoteSubmission>| {
            let api_client = api_client.clone();
            let toast = toast.clone();
            let queue = queue.clone();
            spawn_local(async move {
                match approve(&api_client.quotes(), submission).await {
                    Ok(id) => {
                        queue.settle(id);
                        toast.success("Cytat został zatwierdzony!");
                    }
                    Err(e) => {
                        Logger::error_with_component("moderate-quotes", &format!("Approve failed: {}", e));
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
            if !gloo::dialogs::confirm("Czy na pewno chcesz odrzucić ten cytat?") {
                return;
            }
            let api_client = api_client.clone();
            let toast = toast.clone();
            let queue = queue.clone();
            spawn_local(async move {
                match reject(&api_client.quotes(), SecondaryAction::RejectRequested { id }).await {
                    Ok(id) => {
                        queue.settle(id);
                        toast.success("Cytat został odrzucony.");
                    }
                    Err(e) => {
                        Logger::error_with_component("moderate-quotes", &format!("Reject failed: {}", e));
                        toast.error(e.user_message(locale));
                    }
                }
            });
        })
    };

    let (quotes, target, denied, error) = queue.with(|q| {
        let quotes: Vec<_> = q.pending().map(|r| (r.clone(), q.is_selected(r.id))).collect();
        let error = q.list().error();
        (
            quotes,
            q.selected().cloned(),
            error.is_some_and(|e| e.is_authorization()),
            error.map(|e| e.user_message(locale)),
        )
    });

    if denied {
        return html! { <div class="error banner">{error.unwrap_or_default()}</div> };
    }

    let rows = quotes.into_iter().map(|(quote, selected)| {
        let onclick = {
            let queue = queue.clone();
            let id = quote.id;
            Callback::from(move |_: MouseEvent| queue.select(id))
        };
        html! {
            <tr key={quote.id} class={classes!(selected.then_some("selected"))} {onclick}>
                <td>{quote.author_name().to_string()}</td>
                <td>{quote.text.clone()}</td>
                <td>{format_optional(quote.quote_date_info.as_ref(), locale)}</td>
            </tr>
        }
    });

    html! {
        <div class="moderate-quotes">
            <h2>{"Cytaty do moderacji"}</h2>
            if let Some(message) = error {
                <div class="error">{message}</div>
            }
            <table class="pending-table">
                <tbody>{ for rows }</tbody>
            </table>
            {moderation_pagination(&queue, &props.config.page_size_options)}
            <QuoteFormView
                api_client={props.api_client.clone()}
                config={props.config.clone()}
                {target}
                on_submit={on_approve}
                {on_reject}
            />
        </div>
    }
}
