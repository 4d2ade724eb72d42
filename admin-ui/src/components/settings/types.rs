//! Settings panel data types

use shared_types::{RecordDraft, RecordFields, RefKind, RefRecord};

/// Severity of a standalone notice dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// State of the panel's single confirmation dialog.
///
/// The pending write lives inside the `ConflictConfirm` variant: a pending
/// write exists iff the conflict dialog is open.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState {
    Closed,
    /// Asks before deleting a persisted record
    DeleteConfirm {
        kind: RefKind,
        id: i64,
        label: String,
    },
    /// Asks whether a create that hit an existing code should become an
    /// update of that record. `pending` is the candidate as the user typed it.
    ConflictConfirm {
        kind: RefKind,
        pending: RecordDraft,
        title: String,
        message: String,
    },
    /// Standalone message with a single dismiss button
    Notice {
        level: NoticeLevel,
        title: String,
        message: String,
    },
}

/// What `begin_save` decided. The coordinator only contacts the Record Store
/// for the `Create`/`Update` outcomes.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveAction {
    /// Required fields missing; the form now shows its hints
    Rejected,
    /// Creation attempt with no code conflict
    Create(RecordDraft),
    /// Save of an already-persisted record, keyed by its code
    Update { code: String, fields: RecordFields },
    /// Code conflict: the write is parked in the confirmation modal
    Conflict,
}

/// What the coordinator must do after a confirm click
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    /// Nothing to resume; the dialog just closed
    Dismissed,
    /// Turn the parked conflicting create into an update of the existing
    /// record, carrying the new field values
    ResumeConflict { kind: RefKind, pending: RecordDraft },
    /// Delete the confirmed record
    Delete { kind: RefKind, id: i64 },
}

/// Per-kind slice of the panel: cached list plus form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KindState {
    /// Local cache of the Record Store list; source of truth for conflict
    /// detection
    pub records: Vec<RefRecord>,
    /// New-record form fields
    pub draft: RecordDraft,
    /// Row currently being edited inline, with its unsaved field values
    pub editing: Option<RefRecord>,
    /// Set on a rejected submit so the form shows required-field hints
    pub form_submitted: bool,
}
