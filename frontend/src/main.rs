use yew::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;

use components::menu::Menu;
use components::toast::ToastView;
use hooks::use_session::use_session;
use hooks::use_toast::use_toast;
use pages::home::Home;
use pages::list_authors::ListAuthors;
use pages::list_favorites::ListFavorites;
use pages::list_quotes::ListQuotes;
use pages::moderate_authors::ModerateAuthors;
use pages::moderate_quotes::ModerateQuotes;
use pages::submit_author::SubmitAuthor;
use pages::submit_quote::SubmitQuote;
use services::api::ApiClient;
use services::config::app_config;
use services::logging::{self, Logger};

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    /// Quote list, optionally pre-filtered by author name
    Quotes { author: Option<String> },
    Authors,
    Favorites,
    SubmitQuote,
    SubmitAuthor,
    ModerateQuotes,
    ModerateAuthors,
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| app_config());
    let api_client = use_memo((), {
        let config = config.clone();
        move |_| ApiClient::from_config(&config)
    });
    let route = use_state(|| Route::Home);
    let session = use_session(&api_client);
    let toast = use_toast(config.toast_duration_ms);

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            Logger::debug_with_component("app", &format!("Navigating to {:?}", next));
            route.set(next);
        })
    };

    let on_select_author = on_navigate.reform(|name: String| Route::Quotes { author: Some(name) });

    let api_client = (*api_client).clone();
    let config = (*config).clone();
    let session_state = session.state.clone();
    let toast_actions = toast.actions.clone();

    let page = match (*route).clone() {
        Route::Home => html! { <Home {api_client} locale={config.locale} /> },
        Route::Quotes { author } => {
            let author_key = author.clone().unwrap_or_default();
            html! {
            <ListQuotes
                key={author_key}
                {api_client}
                {config}
                session={session_state}
                {author}
            />
            }
        }
        Route::Authors => html! { <ListAuthors {api_client} {config} {on_select_author} /> },
        Route::Favorites => html! { <ListFavorites {api_client} {config} session={session_state} /> },
        Route::SubmitQuote => html! {
            <SubmitQuote {api_client} {config} session={session_state} toast={toast_actions} />
        },
        Route::SubmitAuthor => html! {
            <SubmitAuthor {api_client} {config} session={session_state} toast={toast_actions} />
        },
        Route::ModerateQuotes => html! { <ModerateQuotes {api_client} {config} toast={toast_actions} /> },
        Route::ModerateAuthors => html! { <ModerateAuthors {api_client} {config} toast={toast_actions} /> },
    };

    html! {
        <div class="app">
            <Menu
                session={session.state}
                current={(*route).clone()}
                {on_navigate}
                on_logout={session.actions.logout}
            />
            <main class="content">
                {page}
            </main>
            <ToastView toast={toast.toast} />
        </div>
    }
}

fn main() {
    logging::init(app_config().log_level_filter());
    yew::Renderer::<App>::new().render();
}
