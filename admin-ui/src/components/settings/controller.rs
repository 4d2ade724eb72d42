//! Write coordinator
//!
//! Async orchestration of the save/confirm/cancel/delete flows. State
//! transitions are synchronous (`state.rs`); this module performs the Record
//! Store I/O between them through injected seams, so the whole coordinator
//! runs against an in-memory store in native tests.

use dioxus::prelude::*;
use shared_types::RefKind;

use crate::api::RecordStore;
use crate::notify::Notifier;

use super::logic;
use super::state::PanelState;
use super::types::{ConfirmAction, NoticeLevel, SaveAction};

/// Mutable handle to the panel state shared with the renderer. The view backs
/// this with a `Signal`; tests use `Rc<RefCell<_>>`. The guard is released
/// before every await point.
pub trait PanelHandle: Clone + 'static {
    fn with<R>(&self, f: impl FnOnce(&mut PanelState) -> R) -> R;
}

impl PanelHandle for Signal<PanelState> {
    fn with<R>(&self, f: impl FnOnce(&mut PanelState) -> R) -> R {
        let mut signal = *self;
        let mut state = signal.write();
        f(&mut *state)
    }
}

/// Fill every kind's cache from the Record Store. Used once on mount.
pub async fn load_all(
    panel: &impl PanelHandle,
    store: &impl RecordStore,
    notify: &impl Notifier,
) {
    panel.with(|s| s.loading = true);
    for kind in RefKind::ALL {
        match store.list(kind).await {
            Ok(records) => panel.with(|s| s.apply_records(kind, records)),
            Err(e) => notify.error(&logic::load_error_message(kind, &e)),
        }
    }
    panel.with(|s| s.loading = false);
}

/// Re-fetch one kind's authoritative list so subsequent conflict checks see
/// up-to-date data.
pub async fn refresh_kind(
    panel: &impl PanelHandle,
    store: &impl RecordStore,
    notify: &impl Notifier,
    kind: RefKind,
) {
    match store.list(kind).await {
        Ok(records) => panel.with(|s| s.apply_records(kind, records)),
        Err(e) => notify.error(&logic::load_error_message(kind, &e)),
    }
}

/// Save `kind`'s form. The in-memory decision (`begin_save`) always completes
/// before any network call: an update goes straight to the store, a creation
/// attempt is conflict-checked against the local cache and either written or
/// parked behind the confirmation dialog.
pub async fn save_record(
    panel: &impl PanelHandle,
    store: &impl RecordStore,
    notify: &impl Notifier,
    kind: RefKind,
) {
    let action = panel.with(|s| s.begin_save(kind));
    match action {
        // Nothing to do: the form shows its hints, or the conflict dialog is
        // now waiting on the user.
        SaveAction::Rejected | SaveAction::Conflict => {}
        SaveAction::Create(draft) => match store.create(kind, &draft).await {
            Ok(_) => {
                notify.success(&logic::created_message(kind));
                panel.with(|s| s.finish_write(kind));
                refresh_kind(panel, store, notify, kind).await;
            }
            Err(e) => {
                // The draft stays as typed so the administrator can retry.
                notify.error(&e);
                panel.with(|s| s.saving = false);
            }
        },
        SaveAction::Update { code, fields } => match store.update(kind, &code, &fields).await {
            Ok(_) => {
                notify.success(&logic::updated_message(kind));
                panel.with(|s| s.finish_write(kind));
                refresh_kind(panel, store, notify, kind).await;
            }
            Err(e) => {
                notify.error(&e);
                panel.with(|s| s.saving = false);
            }
        },
    }
}

/// Resolve the confirmation dialog's confirm button. The dialog closes (and
/// any parked write is consumed) before the store is contacted, so a failed
/// resume never re-raises the same conflict.
pub async fn confirm_modal(
    panel: &impl PanelHandle,
    store: &impl RecordStore,
    notify: &impl Notifier,
) {
    let action = panel.with(|s| s.confirm_modal());
    match action {
        ConfirmAction::Dismissed => {}
        ConfirmAction::ResumeConflict { kind, pending } => {
            // The conflicting create becomes an update of the existing record
            // identified by the shared code, carrying the new field values.
            match store.update(kind, &pending.code, &pending.fields()).await {
                Ok(_) => {
                    notify.success(&logic::updated_message(kind));
                    panel.with(|s| s.finish_write(kind));
                    refresh_kind(panel, store, notify, kind).await;
                }
                Err(e) => notify.error(&e),
            }
        }
        ConfirmAction::Delete { kind, id } => match store.delete(kind, id).await {
            Ok(_) => {
                notify.success(&logic::deleted_message(kind));
                refresh_kind(panel, store, notify, kind).await;
            }
            Err(e) => {
                // Rejections carry instructions (e.g. dependent records must
                // go first); they get a dialog rather than a toast.
                panel.with(|s| s.open_notice(NoticeLevel::Error, "Deletion refused", &e));
            }
        },
    }
}

/// Resolve the dialog's cancel button or overlay click. No I/O.
pub fn cancel_modal(panel: &impl PanelHandle) {
    panel.with(|s| s.cancel_modal());
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use shared_types::{RecordDraft, RecordFields, RefRecord};
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use crate::components::settings::types::ModalState;

    impl PanelHandle for Rc<RefCell<PanelState>> {
        fn with<R>(&self, f: impl FnOnce(&mut PanelState) -> R) -> R {
            f(&mut *self.borrow_mut())
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum StoreCall {
        List(RefKind),
        Create(RefKind, RecordDraft),
        Update(RefKind, String, RecordFields),
        Delete(RefKind, i64),
    }

    /// In-memory store that records every call and behaves like the real
    /// service unless a failure flag is set.
    #[derive(Default)]
    struct MockStore {
        lists: RefCell<HashMap<RefKind, Vec<RefRecord>>>,
        calls: RefCell<Vec<StoreCall>>,
        fail_writes: Cell<bool>,
        fail_lists: Cell<bool>,
    }

    impl MockStore {
        fn with_wilayas(records: Vec<RefRecord>) -> Self {
            let store = Self::default();
            store.lists.borrow_mut().insert(RefKind::Wilaya, records);
            store
        }

        fn calls(&self) -> Vec<StoreCall> {
            self.calls.borrow().clone()
        }

        /// Calls that would mutate the store
        fn writes(&self) -> Vec<StoreCall> {
            self.calls()
                .into_iter()
                .filter(|c| !matches!(c, StoreCall::List(_)))
                .collect()
        }
    }

    #[async_trait(?Send)]
    impl RecordStore for MockStore {
        async fn list(&self, kind: RefKind) -> Result<Vec<RefRecord>, String> {
            self.calls.borrow_mut().push(StoreCall::List(kind));
            if self.fail_lists.get() {
                return Err("service unavailable".to_string());
            }
            Ok(self.lists.borrow().get(&kind).cloned().unwrap_or_default())
        }

        async fn create(&self, kind: RefKind, draft: &RecordDraft) -> Result<RefRecord, String> {
            self.calls
                .borrow_mut()
                .push(StoreCall::Create(kind, draft.clone()));
            if self.fail_writes.get() {
                return Err("creation rejected by the service".to_string());
            }
            let mut lists = self.lists.borrow_mut();
            let records = lists.entry(kind).or_default();
            let record = RefRecord {
                id: records.len() as i64 + 1,
                code: draft.code.clone(),
                name: draft.name.clone(),
                arabic_name: draft.arabic_name.clone(),
            };
            records.push(record.clone());
            Ok(record)
        }

        async fn update(
            &self,
            kind: RefKind,
            code: &str,
            fields: &RecordFields,
        ) -> Result<RefRecord, String> {
            self.calls.borrow_mut().push(StoreCall::Update(
                kind,
                code.to_string(),
                fields.clone(),
            ));
            if self.fail_writes.get() {
                return Err("update rejected by the service".to_string());
            }
            let mut lists = self.lists.borrow_mut();
            let records = lists.entry(kind).or_default();
            let record = records
                .iter_mut()
                .find(|r| r.code == code)
                .ok_or_else(|| format!("no record with code {code}"))?;
            record.name = fields.name.clone();
            record.arabic_name = fields.arabic_name.clone();
            Ok(record.clone())
        }

        async fn delete(&self, kind: RefKind, id: i64) -> Result<(), String> {
            self.calls.borrow_mut().push(StoreCall::Delete(kind, id));
            if self.fail_writes.get() {
                return Err(
                    "Cannot delete this wilaya: it still has communes. Delete them first."
                        .to_string(),
                );
            }
            let mut lists = self.lists.borrow_mut();
            if let Some(records) = lists.get_mut(&kind) {
                records.retain(|r| r.id != id);
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        successes: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.successes.borrow_mut().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    fn record(id: i64, code: &str, name: &str) -> RefRecord {
        RefRecord {
            id,
            code: code.to_string(),
            name: name.to_string(),
            arabic_name: String::new(),
        }
    }

    fn draft(code: &str, name: &str) -> RecordDraft {
        RecordDraft {
            code: code.to_string(),
            name: name.to_string(),
            arabic_name: String::new(),
        }
    }

    fn panel_with_cache(records: Vec<RefRecord>) -> Rc<RefCell<PanelState>> {
        let mut state = PanelState::default();
        state.loading = false;
        state.apply_records(RefKind::Wilaya, records);
        Rc::new(RefCell::new(state))
    }

    #[test]
    fn absent_code_creates_without_opening_the_dialog() {
        let store = MockStore::with_wilayas(vec![record(1, "16", "Algiers")]);
        let notify = RecordingNotifier::default();
        let panel = panel_with_cache(vec![record(1, "16", "Algiers")]);
        panel.borrow_mut().wilayas.draft = draft("99", "NewRegion");

        block_on(save_record(&panel, &store, &notify, RefKind::Wilaya));

        assert_eq!(
            store.writes(),
            vec![StoreCall::Create(RefKind::Wilaya, draft("99", "NewRegion"))]
        );
        let state = panel.borrow();
        assert_eq!(state.modal, ModalState::Closed);
        // Finalized: empty form, refreshed cache.
        assert_eq!(state.wilayas.draft, RecordDraft::default());
        assert!(state.wilayas.records.iter().any(|r| r.code == "99"));
        assert!(!state.saving);
        assert_eq!(notify.successes.borrow().len(), 1);
    }

    #[test]
    fn conflicting_code_opens_the_dialog_with_zero_store_calls() {
        // Scenario A
        let store = MockStore::with_wilayas(vec![record(1, "16", "Algiers")]);
        let notify = RecordingNotifier::default();
        let panel = panel_with_cache(vec![record(1, "16", "Algiers")]);
        panel.borrow_mut().wilayas.draft = draft("16", "Alger");

        block_on(save_record(&panel, &store, &notify, RefKind::Wilaya));

        assert!(store.calls().is_empty());
        let state = panel.borrow();
        assert_eq!(state.pending_write(), Some(&draft("16", "Alger")));
        match &state.modal {
            ModalState::ConflictConfirm { message, .. } => {
                assert!(message.contains("\"16\""));
                assert!(message.contains("Algiers"));
            }
            other => panic!("expected conflict dialog, got {other:?}"),
        }
        assert!(!state.saving);
    }

    #[test]
    fn confirmed_conflict_resumes_as_a_single_update() {
        // Scenario B
        let store = MockStore::with_wilayas(vec![record(1, "16", "Algiers")]);
        let notify = RecordingNotifier::default();
        let panel = panel_with_cache(vec![record(1, "16", "Algiers")]);
        panel.borrow_mut().wilayas.draft = draft("16", "Alger");

        block_on(save_record(&panel, &store, &notify, RefKind::Wilaya));
        block_on(confirm_modal(&panel, &store, &notify));

        // Exactly one update keyed by the conflicting code, never a create.
        assert_eq!(
            store.writes(),
            vec![StoreCall::Update(
                RefKind::Wilaya,
                "16".to_string(),
                RecordFields {
                    name: "Alger".to_string(),
                    arabic_name: String::new(),
                },
            )]
        );
        assert_eq!(notify.successes.borrow().len(), 1);
        let state = panel.borrow();
        assert!(state.pending_write().is_none());
        assert_eq!(state.modal, ModalState::Closed);
        assert_eq!(state.wilayas.draft, RecordDraft::default());
        // Refresh picked up the new name.
        assert_eq!(state.wilayas.records[0].name, "Alger");
    }

    #[test]
    fn cancelled_conflict_never_contacts_the_store() {
        // Scenario C
        let store = MockStore::with_wilayas(vec![record(1, "16", "Algiers")]);
        let notify = RecordingNotifier::default();
        let panel = panel_with_cache(vec![record(1, "16", "Algiers")]);
        panel.borrow_mut().wilayas.draft = draft("16", "Alger");

        block_on(save_record(&panel, &store, &notify, RefKind::Wilaya));
        cancel_modal(&panel);

        assert!(store.calls().is_empty());
        let state = panel.borrow();
        assert!(state.pending_write().is_none());
        assert_eq!(state.modal, ModalState::Closed);
        // The typed values survive the cancellation.
        assert_eq!(state.wilayas.draft, draft("16", "Alger"));
    }

    #[test]
    fn confirm_with_nothing_pending_is_a_noop() {
        let store = MockStore::default();
        let notify = RecordingNotifier::default();
        let panel = panel_with_cache(vec![]);

        block_on(confirm_modal(&panel, &store, &notify));

        assert!(store.calls().is_empty());
        assert_eq!(panel.borrow().modal, ModalState::Closed);
    }

    #[test]
    fn create_failure_keeps_the_form_populated() {
        let store = MockStore::default();
        store.fail_writes.set(true);
        let notify = RecordingNotifier::default();
        let panel = panel_with_cache(vec![]);
        panel.borrow_mut().wilayas.draft = draft("99", "NewRegion");

        block_on(save_record(&panel, &store, &notify, RefKind::Wilaya));

        assert_eq!(notify.errors.borrow().len(), 1);
        let state = panel.borrow();
        assert_eq!(state.wilayas.draft, draft("99", "NewRegion"));
        assert!(!state.saving);
        // No refresh on failure.
        assert_eq!(store.calls().len(), 1);
    }

    #[test]
    fn failed_resume_still_clears_the_pending_write() {
        let store = MockStore::with_wilayas(vec![record(1, "16", "Algiers")]);
        let notify = RecordingNotifier::default();
        let panel = panel_with_cache(vec![record(1, "16", "Algiers")]);
        panel.borrow_mut().wilayas.draft = draft("16", "Alger");

        block_on(save_record(&panel, &store, &notify, RefKind::Wilaya));
        store.fail_writes.set(true);
        block_on(confirm_modal(&panel, &store, &notify));

        assert_eq!(store.writes().len(), 1);
        assert_eq!(notify.errors.borrow().len(), 1);
        let state = panel.borrow();
        // The dialog stays closed: the same conflict is not re-raised.
        assert_eq!(state.modal, ModalState::Closed);
        assert!(state.pending_write().is_none());
    }

    #[test]
    fn editing_a_row_updates_without_conflict_check() {
        let store = MockStore::with_wilayas(vec![record(1, "16", "Algiers")]);
        let notify = RecordingNotifier::default();
        let panel = panel_with_cache(vec![record(1, "16", "Algiers")]);
        let mut edited = record(1, "16", "Algiers");
        edited.name = "Alger".to_string();
        panel.borrow_mut().wilayas.editing = Some(edited);

        block_on(save_record(&panel, &store, &notify, RefKind::Wilaya));

        assert_eq!(
            store.writes(),
            vec![StoreCall::Update(
                RefKind::Wilaya,
                "16".to_string(),
                RecordFields {
                    name: "Alger".to_string(),
                    arabic_name: String::new(),
                },
            )]
        );
        let state = panel.borrow();
        assert_eq!(state.modal, ModalState::Closed);
        assert!(state.wilayas.editing.is_none());
    }

    #[test]
    fn delete_confirm_issues_one_delete_and_refreshes() {
        let store = MockStore::with_wilayas(vec![record(1, "16", "Algiers")]);
        let notify = RecordingNotifier::default();
        let panel = panel_with_cache(vec![record(1, "16", "Algiers")]);
        panel
            .borrow_mut()
            .open_delete_confirm(RefKind::Wilaya, &record(1, "16", "Algiers"));

        block_on(confirm_modal(&panel, &store, &notify));

        assert_eq!(
            store.writes(),
            vec![StoreCall::Delete(RefKind::Wilaya, 1)]
        );
        assert_eq!(notify.successes.borrow().len(), 1);
        assert!(panel.borrow().wilayas.records.is_empty());
    }

    #[test]
    fn refused_delete_opens_an_error_notice() {
        let store = MockStore::with_wilayas(vec![record(1, "16", "Algiers")]);
        store.fail_writes.set(true);
        let notify = RecordingNotifier::default();
        let panel = panel_with_cache(vec![record(1, "16", "Algiers")]);
        panel
            .borrow_mut()
            .open_delete_confirm(RefKind::Wilaya, &record(1, "16", "Algiers"));

        block_on(confirm_modal(&panel, &store, &notify));

        let state = panel.borrow();
        match &state.modal {
            ModalState::Notice { level, message, .. } => {
                assert_eq!(*level, NoticeLevel::Error);
                assert!(message.contains("communes"));
            }
            other => panic!("expected error notice, got {other:?}"),
        }
        // The record is still there.
        assert_eq!(state.wilayas.records.len(), 1);
    }

    #[test]
    fn load_all_fills_every_cache() {
        let store = MockStore::default();
        store
            .lists
            .borrow_mut()
            .insert(RefKind::Wilaya, vec![record(1, "16", "Algiers")]);
        store
            .lists
            .borrow_mut()
            .insert(RefKind::Commune, vec![record(1, "1601", "Bab El Oued")]);
        store
            .lists
            .borrow_mut()
            .insert(RefKind::PropertyType, vec![record(1, "APT", "Apartment")]);
        let notify = RecordingNotifier::default();
        let panel = Rc::new(RefCell::new(PanelState::default()));

        block_on(load_all(&panel, &store, &notify));

        let state = panel.borrow();
        assert!(!state.loading);
        assert_eq!(state.wilayas.records.len(), 1);
        assert_eq!(state.communes.records.len(), 1);
        assert_eq!(state.property_types.records.len(), 1);
    }

    #[test]
    fn load_failure_surfaces_an_error() {
        let store = MockStore::default();
        store.fail_lists.set(true);
        let notify = RecordingNotifier::default();
        let panel = Rc::new(RefCell::new(PanelState::default()));

        block_on(load_all(&panel, &store, &notify));

        assert_eq!(notify.errors.borrow().len(), RefKind::ALL.len());
        assert!(!panel.borrow().loading);
    }
}
