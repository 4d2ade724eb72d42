//! Confirmation dialog rendering
//!
//! One overlay dialog for every modal kind; which buttons it offers depends
//! on the variant. Confirm/cancel are resolved by the write coordinator, not
//! here.

use dioxus::prelude::*;

use super::logic;
use super::state::PanelState;
use super::types::{ModalState, NoticeLevel};

#[component]
pub fn ConfirmDialog(
    state: Signal<PanelState>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> Element {
    let modal = state.read().modal.clone();

    match modal {
        ModalState::Closed => rsx! {},
        ModalState::DeleteConfirm { kind, label, .. } => rsx! {
            DialogFrame {
                title: "Confirm deletion",
                message: logic::delete_message(kind, &label),
                confirm_label: "Delete",
                danger: true,
                show_cancel: true,
                on_confirm,
                on_cancel,
            }
        },
        ModalState::ConflictConfirm { title, message, .. } => rsx! {
            DialogFrame {
                title,
                message,
                confirm_label: "Update existing",
                danger: false,
                show_cancel: true,
                on_confirm,
                on_cancel,
            }
        },
        ModalState::Notice {
            level,
            title,
            message,
        } => rsx! {
            DialogFrame {
                title,
                message,
                confirm_label: "OK",
                danger: level == NoticeLevel::Error,
                show_cancel: false,
                on_confirm,
                on_cancel,
            }
        },
    }
}

#[component]
fn DialogFrame(
    title: String,
    message: String,
    confirm_label: String,
    danger: bool,
    show_cancel: bool,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> Element {
    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "dialog-panel",
                onclick: move |e| e.stop_propagation(),
                h3 { class: "dialog-title", "{title}" }
                p { class: "dialog-message", "{message}" }
                div { class: "dialog-actions",
                    if show_cancel {
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                    }
                    button {
                        class: if danger { "btn btn-danger" } else { "btn btn-primary" },
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
