use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

pub struct UseToastResult {
    pub toast: Option<Toast>,
    pub actions: UseToastActions,
}

#[derive(Clone, PartialEq)]
pub struct UseToastActions {
    pub show: Callback<(String, ToastKind)>,
}

impl UseToastActions {
    pub fn success(&self, message: impl Into<String>) {
        self.show.emit((message.into(), ToastKind::Success));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show.emit((message.into(), ToastKind::Error));
    }
}

/// One toast at a time; a newer toast restarts the dismissal timer
#[hook]
pub fn use_toast(duration_ms: u32) -> UseToastResult {
    let toast = use_state(|| Option::<Toast>::None);
    let generation = use_mut_ref(|| 0u64);

    let show = {
        let toast = toast.clone();
        let generation = generation.clone();
        use_callback(duration_ms, move |(message, kind): (String, ToastKind), duration_ms| {
            let current = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };
            toast.set(Some(Toast { message, kind }));

            let toast = toast.clone();
            let generation = generation.clone();
            let duration_ms = *duration_ms;
            spawn_local(async move {
                TimeoutFuture::new(duration_ms).await;
                if *generation.borrow() == current {
                    toast.set(None);
                }
            });
        })
    };

    UseToastResult {
        toast: (*toast).clone(),
        actions: UseToastActions { show },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_toast_classes() {
        assert_eq!(ToastKind::Success.css_class(), "toast success");
        assert_eq!(ToastKind::Error.css_class(), "toast error");
    }
}
