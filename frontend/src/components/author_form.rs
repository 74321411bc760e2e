use catalog_domain::author_form::AuthorForm;
use catalog_domain::record_form::{EditTarget, SecondaryAction, Submission};
use catalog_domain::{CatalogConfig, Locale};
use shared::{AuthorPayload, AuthorRecord};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::date_row::{DateEdit, DateRow};
use super::nationality_picker::NationalityPickerView;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct AuthorFormProps {
    pub api_client: ApiClient,
    pub config: CatalogConfig,
    /// Pending record under moderation; `None` creates a new author
    #[prop_or_default]
    pub target: Option<EditTarget<AuthorRecord>>,
    pub on_submit: Callback<Submission<AuthorPayload>>,
    #[prop_or_default]
    pub on_reject: Callback<i64>,
}

#[function_component(AuthorFormView)]
pub fn author_form_view(props: &AuthorFormProps) -> Html {
    let form = use_mut_ref(AuthorForm::new);
    let redraw = use_force_update();
    let locale: Locale = props.config.locale;

    form.borrow_mut().observe(props.target.as_ref());

    let edit = |apply: fn(&mut AuthorForm, String)| {
        let form = form.clone();
        let redraw = redraw.clone();
        move |value: String| {
            apply(&mut form.borrow_mut(), value);
            redraw.force_update();
        }
    };

    let on_name_input = {
        let set_name = edit(|f, v| f.draft_mut().name = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_name(input.value());
        })
    };

    let date_handler = |birth: bool| {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |change: DateEdit| {
            {
                let mut form = form.borrow_mut();
                let draft = form.draft_mut();
                change.apply(if birth { &mut draft.birth } else { &mut draft.death });
            }
            redraw.force_update();
        })
    };

    let on_toggle_nationality = {
        let toggle = edit(|f, code| {
            f.draft_mut().nationalities.toggle(&code);
        });
        Callback::from(move |code: String| toggle(code))
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
        <form class="author-form" onsubmit={on_submit}>
            <label>{"Imię i nazwisko"}</label>
            <input type="text" value={draft.name} oninput={on_name_input} />

            <DateRow label="Data urodzenia" date={draft.birth} {locale} on_edit={date_handler(true)} />
            <DateRow label="Data śmierci" date={draft.death} {locale} on_edit={date_handler(false)} />

            <label>{"Narodowość"}</label>
            <NationalityPickerView
                api_client={props.api_client.clone()}
                picker={draft.nationalities}
                on_toggle={on_toggle_nationality}
                suggestion_limit={props.config.country_suggestion_limit}
            />

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
