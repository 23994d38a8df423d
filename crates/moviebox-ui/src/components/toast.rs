//! Toast host with per-severity auto-dismiss.

use crate::models::{Toast, ToastKind};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

const NOTICE_MS: u32 = 4_000;
// Error toasts report unconfirmed optimistic mutations; give them longer.
const WARNING_MS: u32 = 8_000;

const fn lifetime_ms(kind: ToastKind) -> u32 {
    match kind {
        ToastKind::Info | ToastKind::Success => NOTICE_MS,
        ToastKind::Error => WARNING_MS,
    }
}

const fn kind_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Info => "info",
        ToastKind::Success => "success",
        ToastKind::Error => "error",
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    {
        let toasts = props.toasts.clone();
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let timers: Vec<Timeout> = list
                    .iter()
                    .map(|toast| {
                        let on_dismiss = on_dismiss.clone();
                        let id = toast.id;
                        Timeout::new(lifetime_ms(toast.kind), move || on_dismiss.emit(id))
                    })
                    .collect();
                move || drop(timers)
            },
            toasts,
        );
    }

    html! {
        <div class="toast-host" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| toast_item(toast, &props.on_dismiss))}
        </div>
    }
}

fn toast_item(toast: &Toast, on_dismiss: &Callback<u64>) -> Html {
    let id = toast.id;
    let on_close = {
        let on_dismiss = on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("toast", kind_class(toast.kind))} role="status">
            <span class="toast-message">{toast.message.clone()}</span>
            <button class="ghost" aria-label="Dismiss" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
