use catalog_domain::session::{SessionState, SubmitTarget};
use yew::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct MenuProps {
    pub session: SessionState,
    pub current: Route,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

/// Top navigation; "add" entries lead moderators to the moderation queues
#[function_component(Menu)]
pub fn menu(props: &MenuProps) -> Html {
    let link = |route: Route, label: &'static str| {
        let active = props.current == route;
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(route.clone());
        });
        html! {
            <a href="#" class={classes!(active.then_some("active"))} {onclick}>{label}</a>
        }
    };

    let add_link = |submit: Route, moderate: Route, label: &'static str| match props.session.submit_target() {
        SubmitTarget::Moderate => link(moderate, label),
        SubmitTarget::Submit => link(submit, label),
        SubmitTarget::LoginRequired => html! {
            <a class="disabled" title="Wymagane logowanie">{label}</a>
        },
    };

    let on_logout = props.on_logout.reform(|e: MouseEvent| e.prevent_default());

    html! {
        <nav class="menu">
            <ul>
                <li>{link(Route::Home, "Strona główna")}</li>
                <li>
                    {link(Route::Quotes { author: None }, "Cytaty")}
                    <ul class="sub-menu">
                        <li>{add_link(Route::SubmitQuote, Route::ModerateQuotes, "Dodaj cytat")}</li>
                    </ul>
                </li>
                <li>
                    {link(Route::Authors, "Autorzy")}
                    <ul class="sub-menu">
                        <li>{add_link(Route::SubmitAuthor, Route::ModerateAuthors, "Dodaj autora")}</li>
                    </ul>
                </li>
                if props.session.is_signed_in() {
                    <li>{link(Route::Favorites, "Ulubione")}</li>
                    <li><a href="#" class="logout-btn" onclick={on_logout}>{"Wyloguj"}</a></li>
                }
            </ul>
        </nav>
    }
}
