use catalog_domain::session::{end_session, resolve_session, SessionState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

pub struct UseSessionResult {
    pub state: SessionState,
    pub actions: UseSessionActions,
}

#[derive(Clone, PartialEq)]
pub struct UseSessionActions {
    pub logout: Callback<()>,
}

/// Resolve the signed-in user once, when the app mounts
#[hook]
pub fn use_session(api_client: &ApiClient) -> UseSessionResult {
    let state = use_state(SessionState::default);
    let is_mounted = use_mut_ref(|| true);

    use_effect_with((), {
        let api_client = api_client.clone();
        let state = state.clone();
        let is_mounted = is_mounted.clone();
        move |_| {
            {
                let is_mounted = is_mounted.clone();
                spawn_local(async move {
                    let resolved = resolve_session(&api_client).await;
                    if *is_mounted.borrow() {
                        state.set(resolved);
                    }
                });
            }
            move || *is_mounted.borrow_mut() = false
        }
    });

    let logout = {
        let api_client = api_client.clone();
        let state = state.clone();
        use_callback((), move |_: (), _| {
            let api_client = api_client.clone();
            let state = state.clone();
            spawn_local(async move {
                state.set(end_session(&api_client).await);
            });
        })
    };

    UseSessionResult {
        state: (*state).clone(),
        actions: UseSessionActions { logout },
    }
}
