use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    // Distinguishes two identical notices raised back to back.
    pub serial: u32,
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |notice| {
                let timeout = notice.as_ref().map(|_| {
                    Timeout::new(config::TOAST_DURATION_MS, move || on_dismiss.emit(()))
                });
                // Dropping a pending Timeout cancels it.
                move || drop(timeout)
            },
            props.notice.clone(),
        );
    }

    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };

    let kind_class = match notice.kind {
        NoticeKind::Success => "toast-success",
        NoticeKind::Failure => "toast-failure",
    };
    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status">
            <span class="toast-text">{&notice.text}</span>
            <button class="toast-close" onclick={close} aria-label="Dismiss">{"×"}</button>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        bottom: 24px;
                        right: 24px;
                        display: flex;
                        align-items: center;
                        gap: 12px;
                        padding: 14px 18px;
                        border-radius: 12px;
                        background: rgba(26, 26, 26, 0.95);
                        color: #fff;
                        box-shadow: 0 16px 32px rgba(0,0,0,0.3);
                        z-index: 100;
                        animation: toastIn 0.3s ease-out forwards;
                    }
                    .toast-success { border-left: 4px solid #22c55e; }
                    .toast-failure { border-left: 4px solid #ef4444; }
                    .toast-close {
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 18px;
                        cursor: pointer;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
        </div>
    }
}
