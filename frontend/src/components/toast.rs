use yew::prelude::*;

use crate::hooks::use_toast::Toast;

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Option<Toast>,
}

#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    match &props.toast {
        Some(toast) => html! {
            <div class={toast.kind.css_class()}>{toast.message.clone()}</div>
        },
        None => html! {},
    }
}
