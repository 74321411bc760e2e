use catalog_domain::period::Period;
use catalog_domain::quote_form::{find_suggestions, AuthorLookup, LookupStep, QuoteForm, QuoteSubmission};
use catalog_domain::record_form::{EditTarget, SecondaryAction, Submission};
use catalog_domain::{CatalogConfig, Locale};
use gloo::timers::future::TimeoutFuture;
use shared::QuoteRecord;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::date_row::{DateEdit, DateRow};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct QuoteFormProps {
    pub api_client: ApiClient,
    pub config: CatalogConfig,
    /// Pending record under moderation; `None` submits a new quote
    #[prop_or_default]
    pub target: Option<EditTarget<QuoteRecord>>,
    pub on_submit: Callback<Submission<QuoteSubmission>>,
    #[prop_or_default]
    pub on_reject: Callback<i64>,
}

#[function_component(QuoteFormView)]
pub fn quote_form_view(props: &QuoteFormProps) -> Html {
    let form = use_mut_ref(QuoteForm::new);
    let lookup = use_mut_ref(|| AuthorLookup::new(props.config.author_lookup_min_chars));
    let redraw = use_force_update();
    let locale: Locale = props.config.locale;

    if form.borrow_mut().observe(props.target.as_ref()) {
        // Auto-filled names must not trigger a lookup that is still in flight
        lookup.borrow_mut().invalidate();
    }

    // Late suggestions after unmount are dropped
    {
        let lookup = lookup.clone();
        use_effect_with((), move |_| move || lookup.borrow_mut().cancel());
    }

    let on_text_input = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.borrow_mut().draft_mut().text = area.value();
            redraw.force_update();
        })
    };

    let on_author_input = {
        let form = form.clone();
        let lookup = lookup.clone();
        let redraw = redraw.clone();
        let api_client = props.api_client.clone();
        let debounce_ms = props.config.author_lookup_debounce_ms;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let name = input.value();
            form.borrow_mut().draft_mut().set_author_name(&name);

            let step = lookup.borrow_mut().begin(&name);
            match step {
                LookupStep::Clear => form.borrow_mut().draft_mut().close_suggestions(),
                LookupStep::Query { ticket, name } => {
                    let form = form.clone();
                    let lookup = lookup.clone();
                    let redraw = redraw.clone();
                    let directory = api_client.authors();
                    spawn_local(async move {
                        TimeoutFuture::new(debounce_ms).await;
                        if !lookup.borrow().accepts(&ticket) {
                            return;
                        }
                        let suggestions = find_suggestions(&directory, &name).await;
                        let delivered = lookup
                            .borrow()
                            .deliver(form.borrow_mut().draft_mut(), &ticket, suggestions);
                        if delivered {
                            redraw.force_update();
                        }
                    });
                }
            }
            redraw.force_update();
        })
    };

    let choose_author = {
        let form = form.clone();
        let lookup = lookup.clone();
        let redraw = redraw.clone();
        Callback::from(move |author: shared::AuthorRef| {
            form.borrow_mut().draft_mut().choose_author(&author);
            lookup.borrow_mut().invalidate();
            redraw.force_update();
        })
    };

    let on_date_edit = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |change: DateEdit| {
            {
                let mut form = form.borrow_mut();
                let draft = form.draft_mut();
                match change {
                    DateEdit::Type(label) => draft.set_date_type(&label),
                    DateEdit::Value(value) => draft.set_date_value(&value),
                    DateEdit::Precision(label) => draft.set_date_precision(&label),
                    DateEdit::Era(label) => draft.set_date_era(&label),
                }
            }
            redraw.force_update();
        })
    };

    let on_period_change = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.borrow_mut().draft_mut().set_period(&select.value());
            redraw.force_update();
        })
    };

    let on_source_input = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.borrow_mut().draft_mut().source = input.value();
            redraw.force_update();
        })
    };

    let on_submit = {
        let form = form.clone();
        let redraw = redraw.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let result = form.borrow_mut().submit();
            redraw.force_update();
            if let Ok(submission) = result {
                on_submit.emit(submission);
            }
        })
    };

    let on_secondary = {
        let form = form.clone();
        let redraw = redraw.clone();
        let on_reject = props.on_reject.clone();
        Callback::from(move |_: MouseEvent| {
            let action = form.borrow_mut().secondary_action();
            match action {
                SecondaryAction::Cleared => redraw.force_update(),
                SecondaryAction::RejectRequested { id } => on_reject.emit(id),
            }
        })
    };

    let (draft, editing, message) = {
        let form = form.borrow();
        (form.draft().clone(), form.is_editing(), form.message(locale))
    };

    html! {
        <form class="quote-form" onsubmit={on_submit}>
            <label>{"Treść cytatu"}</label>
            <textarea value={draft.text.clone()} oninput={on_text_input} />

            <label>{"Autor"}</label>
            <div class="author-lookup">
                <input
                    type="text"
                    class={classes!(draft.author_id().is_none().then_some("unresolved"))}
                    value={draft.author_name().to_string()}
                    oninput={on_author_input}
                />
                if !draft.suggestions().is_empty() {
                    <ul class="author-suggestions">
                        { for draft.suggestions().iter().map(|author| {
                            let onclick = {
                                let choose_author = choose_author.clone();
                                let author = author.clone();
                                Callback::from(move |_: MouseEvent| choose_author.emit(author.clone()))
                            };
                            html! { <li {onclick}>{author.name.clone()}</li> }
                        }) }
                    </ul>
                }
            </div>

            <DateRow label="Data cytatu" date={draft.date().clone()} {locale} on_edit={on_date_edit} />

            <label>{"Okres"}</label>
            <select onchange={on_period_change}>
                <option value="" selected={draft.period().is_empty()}>{"-"}</option>
                { for Period::ALL.iter().map(|p| html! {
                    <option value={p.label()} selected={draft.period() == p.label()}>{p.label()}</option>
                }) }
            </select>

            <label>{"Źródło"}</label>
            <input type="text" value={draft.source.clone()} oninput={on_source_input} />

            if let Some(message) = message {
                <div class="form-message error">{message}</div>
            }

            <div class="form-buttons">
                <button type="submit">{ if editing { "Zatwierdź" } else { "Zapisz" } }</button>
                <button type="button" onclick={on_secondary}>{ if editing { "Odrzuć" } else { "Wyczyść" } }</button>
            </div>
        </form>
    }
}
