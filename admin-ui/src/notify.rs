//! Toast notifications
//!
//! Fire-and-forget success/error messages. The write coordinator reports
//! through the [`Notifier`] trait; [`ToastNotifier`] feeds the global toast
//! list rendered by [`ToastHost`].

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub level: ToastLevel,
    pub message: String,
}

/// Global toast list, newest last
pub static TOASTS: dioxus::signals::GlobalSignal<Vec<Toast>> =
    dioxus::signals::GlobalSignal::new(Vec::new);

/// How long a toast stays on screen
const TOAST_DISMISS_MS: u32 = 4000;

pub fn push_toast(level: ToastLevel, message: &str) {
    TOASTS.write().push(Toast {
        id: uuid::Uuid::new_v4().to_string(),
        level,
        message: message.to_string(),
    });
}

pub fn dismiss_toast(id: &str) {
    TOASTS.write().retain(|t| t.id != id);
}

/// Notification sink consumed by the write coordinator. No return value: the
/// panel never waits on a notification.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// [`Notifier`] backed by the global toast list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        push_toast(ToastLevel::Success, message);
    }

    fn error(&self, message: &str) {
        push_toast(ToastLevel::Error, message);
    }
}

const TOAST_STYLES: &str = r#"
.toast-stack {
    position: fixed;
    top: 1rem;
    right: 1rem;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    z-index: 2000;
}
.toast {
    min-width: 240px;
    max-width: 360px;
    padding: 0.6rem 0.9rem;
    border-radius: 0.375rem;
    font-size: 0.875rem;
    color: #f8fafc;
    cursor: pointer;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.25);
}
.toast-success { background: #15803d; }
.toast-error { background: #b91c1c; }
"#;

#[component]
pub fn ToastHost() -> Element {
    let toasts = TOASTS.read().clone();

    // Schedule a dismiss for every visible toast. Re-renders re-spawn timers
    // for toasts already scheduled; dismiss_toast by id makes the extras
    // no-ops.
    use_effect(move || {
        for toast in TOASTS.read().iter() {
            let id = toast.id.clone();
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
                dismiss_toast(&id);
            });
        }
    });

    rsx! {
        style { {TOAST_STYLES} }
        div {
            class: "toast-stack",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: if toast.level == ToastLevel::Success { "toast toast-success" } else { "toast toast-error" },
                    onclick: {
                        let id = toast.id.clone();
                        move |_| dismiss_toast(&id)
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
