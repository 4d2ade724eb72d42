//! Panel state and its transitions
//!
//! `PanelState` is the single explicit state object for the settings panel:
//! the per-kind caches and forms, the confirmation modal, and the in-flight
//! flags. The view owns it behind a `Signal`; the write coordinator mutates
//! it through these transitions and performs I/O between them, so every
//! conflict check completes before any network call is issued.

use dioxus_logger::tracing;
use shared_types::{RecordDraft, RefKind, RefRecord};

use super::logic;
use super::types::{ConfirmAction, KindState, ModalState, NoticeLevel, SaveAction};

#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub active: RefKind,
    pub wilayas: KindState,
    pub communes: KindState,
    pub property_types: KindState,
    pub modal: ModalState,
    /// A store write is in flight. Cleared when the write settles, and at the
    /// conflict suspension point (the save is then waiting on the user, not
    /// on I/O).
    pub saving: bool,
    /// Initial cache fill is in flight
    pub loading: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            active: RefKind::Wilaya,
            wilayas: KindState::default(),
            communes: KindState::default(),
            property_types: KindState::default(),
            modal: ModalState::Closed,
            saving: false,
            loading: true,
        }
    }
}

impl PanelState {
    pub fn kind(&self, kind: RefKind) -> &KindState {
        match kind {
            RefKind::Wilaya => &self.wilayas,
            RefKind::Commune => &self.communes,
            RefKind::PropertyType => &self.property_types,
        }
    }

    pub fn kind_mut(&mut self, kind: RefKind) -> &mut KindState {
        match kind {
            RefKind::Wilaya => &mut self.wilayas,
            RefKind::Commune => &mut self.communes,
            RefKind::PropertyType => &mut self.property_types,
        }
    }

    /// The write parked behind the conflict dialog, if it is open
    pub fn pending_write(&self) -> Option<&RecordDraft> {
        match &self.modal {
            ModalState::ConflictConfirm { pending, .. } => Some(pending),
            _ => None,
        }
    }

    /// Decide what a save of `kind`'s form means. Synchronous and in-memory:
    /// the conflict check runs against the local cache before the coordinator
    /// issues any network call.
    pub fn begin_save(&mut self, kind: RefKind) -> SaveAction {
        // A new save attempt destroys any stale parked conflict.
        if matches!(self.modal, ModalState::ConflictConfirm { .. }) {
            self.modal = ModalState::Closed;
        }

        if let Some(editing) = self.kind(kind).editing.clone() {
            // Already-persisted record: update keyed by its code, no
            // conflict check.
            self.saving = true;
            return SaveAction::Update {
                code: editing.code.clone(),
                fields: editing.fields(),
            };
        }

        let draft = self.kind(kind).draft.clone();
        if draft.code.trim().is_empty() || draft.name.trim().is_empty() {
            self.kind_mut(kind).form_submitted = true;
            return SaveAction::Rejected;
        }

        if let Some(existing) = logic::find_by_code(&self.kind(kind).records, &draft.code) {
            let existing_name = existing.name.clone();
            self.saving = false;
            self.open_for_conflict(kind, &existing_name, draft);
            return SaveAction::Conflict;
        }

        self.saving = true;
        SaveAction::Create(draft)
    }

    /// Only entry into the conflict-confirm state. Parks the candidate as the
    /// pending write and describes the conflict.
    pub fn open_for_conflict(&mut self, kind: RefKind, existing_name: &str, candidate: RecordDraft) {
        self.modal = ModalState::ConflictConfirm {
            kind,
            title: "Existing code".to_string(),
            message: logic::conflict_message(kind, &candidate.code, existing_name),
            pending: candidate,
        };
    }

    pub fn open_delete_confirm(&mut self, kind: RefKind, record: &RefRecord) {
        self.modal = ModalState::DeleteConfirm {
            kind,
            id: record.id,
            label: record.name.clone(),
        };
    }

    pub fn open_notice(&mut self, level: NoticeLevel, title: &str, message: &str) {
        self.modal = ModalState::Notice {
            level,
            title: title.to_string(),
            message: message.to_string(),
        };
    }

    /// Confirm transition: closes the dialog first (the pending write dies
    /// with the transition, whatever the resume outcome), then reports what
    /// the coordinator must do.
    pub fn confirm_modal(&mut self) -> ConfirmAction {
        match std::mem::replace(&mut self.modal, ModalState::Closed) {
            ModalState::Closed => {
                // Nothing was open; stay closed and touch nothing else.
                tracing::debug!("confirm with no open dialog, ignoring");
                ConfirmAction::Dismissed
            }
            ModalState::Notice { .. } => ConfirmAction::Dismissed,
            ModalState::DeleteConfirm { kind, id, .. } => ConfirmAction::Delete { kind, id },
            ModalState::ConflictConfirm { kind, pending, .. } => {
                ConfirmAction::ResumeConflict { kind, pending }
            }
        }
    }

    /// Cancel transition: valid in any state, idempotent, drops any pending
    /// write, never reaches the Record Store.
    pub fn cancel_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Shared finalize for successful writes: clear the editing selection,
    /// reset the form to empty defaults, clear the submit hint and the saving
    /// flag. The coordinator refreshes the cache right after.
    pub fn finish_write(&mut self, kind: RefKind) {
        self.saving = false;
        let slice = self.kind_mut(kind);
        slice.editing = None;
        slice.draft = RecordDraft::default();
        slice.form_submitted = false;
    }

    /// Replace `kind`'s local cache with the authoritative list
    pub fn apply_records(&mut self, kind: RefKind, records: Vec<RefRecord>) {
        self.kind_mut(kind).records = records;
    }
}
