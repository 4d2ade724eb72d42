//! Settings panel view
//!
//! Renders the tab strip, per-kind form and list, and wires user interaction
//! into the write coordinator. All Record Store traffic goes through the
//! coordinator; this module only reads and edits `PanelState`.

use dioxus::prelude::*;
use shared_types::{RefKind, RefRecord};

use crate::api::HttpRecordStore;
use crate::notify::ToastNotifier;

use super::controller;
use super::modal::ConfirmDialog;
use super::state::PanelState;
use super::styles::SETTINGS_STYLES;

#[component]
pub fn SettingsPage() -> Element {
    let mut state = use_signal(PanelState::default);
    let mut initial_load_done = use_signal(|| false);

    // Initial cache fill - only run once
    use_effect(move || {
        if initial_load_done() {
            return;
        }
        initial_load_done.set(true);
        spawn(async move {
            controller::load_all(&state, &HttpRecordStore, &ToastNotifier).await;
        });
    });

    let handle_save = use_callback(move |kind: RefKind| {
        if state.read().saving {
            return;
        }
        spawn(async move {
            controller::save_record(&state, &HttpRecordStore, &ToastNotifier, kind).await;
        });
    });

    let handle_confirm = use_callback(move |_: ()| {
        spawn(async move {
            controller::confirm_modal(&state, &HttpRecordStore, &ToastNotifier).await;
        });
    });

    let handle_cancel = use_callback(move |_: ()| {
        controller::cancel_modal(&state);
    });

    let active = state.read().active;
    let loading = state.read().loading;

    rsx! {
        style { {SETTINGS_STYLES} }
        div { class: "settings-container",
            div { class: "settings-header",
                h2 { "Reference data" }
                span { class: "settings-subtitle",
                    "Wilayas, communes and property types of the directory"
                }
            }
            div { class: "tab-strip",
                for kind in RefKind::ALL {
                    button {
                        class: if active == kind { "tab-button tab-active" } else { "tab-button" },
                        onclick: move |_| state.write().active = kind,
                        "{kind.title()}"
                    }
                }
            }
            if loading {
                div { class: "settings-loading", "Loading reference data..." }
            } else {
                KindPanel { state, kind: active, on_save: handle_save }
            }
            ConfirmDialog { state, on_confirm: handle_confirm, on_cancel: handle_cancel }
        }
    }
}

#[component]
fn KindPanel(state: Signal<PanelState>, kind: RefKind, on_save: Callback<RefKind>) -> Element {
    let mut state = state;
    let slice = state.read().kind(kind).clone();
    let saving = state.read().saving;
    let code_missing = slice.form_submitted && slice.draft.code.trim().is_empty();
    let name_missing = slice.form_submitted && slice.draft.name.trim().is_empty();

    rsx! {
        div { class: "panel-card",
            h3 { class: "panel-title", "New {kind.label()}" }
            div { class: "form-grid",
                FormField {
                    label: "Code",
                    value: slice.draft.code.clone(),
                    missing: code_missing,
                    on_input: move |v: String| state.write().kind_mut(kind).draft.code = v,
                }
                FormField {
                    label: "Name",
                    value: slice.draft.name.clone(),
                    missing: name_missing,
                    on_input: move |v: String| state.write().kind_mut(kind).draft.name = v,
                }
                FormField {
                    label: "Arabic name",
                    value: slice.draft.arabic_name.clone(),
                    missing: false,
                    on_input: move |v: String| state.write().kind_mut(kind).draft.arabic_name = v,
                }
                button {
                    class: "btn btn-primary",
                    disabled: saving || slice.editing.is_some(),
                    onclick: move |_| on_save.call(kind),
                    if saving { "Saving..." } else { "Add" }
                }
            }
        }
        div { class: "panel-card",
            h3 { class: "panel-title", "{kind.title()}" }
            if slice.records.is_empty() {
                p { class: "empty-hint", "No {kind.label()} recorded yet." }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Code" }
                            th { "Name" }
                            th { "Arabic name" }
                            th { "" }
                        }
                    }
                    tbody {
                        for record in slice.records.clone() {
                            RecordRow {
                                key: "{record.id}",
                                state,
                                kind,
                                record,
                                on_save,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FormField(label: String, value: String, missing: bool, on_input: Callback<String>) -> Element {
    rsx! {
        label { class: "form-field",
            span { class: "field-label", "{label}" }
            input {
                class: if missing { "field-input field-missing" } else { "field-input" },
                value: "{value}",
                oninput: move |e: FormEvent| on_input.call(e.value()),
            }
            if missing {
                span { class: "field-hint", "Required" }
            }
        }
    }
}

#[component]
fn RecordRow(
    state: Signal<PanelState>,
    kind: RefKind,
    record: RefRecord,
    on_save: Callback<RefKind>,
) -> Element {
    let mut state = state;
    let edited = state
        .read()
        .kind(kind)
        .editing
        .clone()
        .filter(|e| e.id == record.id);

    if let Some(edited) = edited {
        rsx! {
            tr {
                // The code is the identity key; it stays read-only.
                td { "{record.code}" }
                td {
                    input {
                        class: "row-input",
                        value: "{edited.name}",
                        oninput: move |e: FormEvent| {
                            if let Some(editing) = state.write().kind_mut(kind).editing.as_mut() {
                                editing.name = e.value();
                            }
                        },
                    }
                }
                td {
                    input {
                        class: "row-input",
                        value: "{edited.arabic_name}",
                        oninput: move |e: FormEvent| {
                            if let Some(editing) = state.write().kind_mut(kind).editing.as_mut() {
                                editing.arabic_name = e.value();
                            }
                        },
                    }
                }
                td {
                    div { class: "row-actions",
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| state.write().kind_mut(kind).editing = None,
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| on_save.call(kind),
                            "Save"
                        }
                    }
                }
            }
        }
    } else {
        let record_for_edit = record.clone();
        let record_for_delete = record.clone();
        rsx! {
            tr {
                td { "{record.code}" }
                td { "{record.name}" }
                td { "{record.arabic_name}" }
                td {
                    div { class: "row-actions",
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| {
                                state.write().kind_mut(kind).editing = Some(record_for_edit.clone());
                            },
                            "Edit"
                        }
                        button {
                            class: "btn btn-danger",
                            onclick: move |_| {
                                state.write().open_delete_confirm(kind, &record_for_delete);
                            },
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
