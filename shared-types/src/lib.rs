//! Shared types between the admin UI and the directory backend
//!
//! These types are used by both:
//! - the Record Store HTTP service (native Rust)
//! - Dioxus components (WASM)
//!
//! Serializable with serde for JSON over HTTP

use serde::{Deserialize, Serialize};

// ============================================================================
// Reference Data Kinds
// ============================================================================

/// The three kinds of administrative reference data the settings panel
/// manages. Each kind has its own list, form, and Record Store endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RefKind {
    Wilaya,
    Commune,
    PropertyType,
}

impl RefKind {
    pub const ALL: [RefKind; 3] = [RefKind::Wilaya, RefKind::Commune, RefKind::PropertyType];

    /// Path segment of the Record Store endpoint for this kind
    pub fn endpoint(&self) -> &'static str {
        match self {
            RefKind::Wilaya => "wilayas",
            RefKind::Commune => "communes",
            RefKind::PropertyType => "property-types",
        }
    }

    /// Singular display name, lowercase ("a wilaya with code ...")
    pub fn label(&self) -> &'static str {
        match self {
            RefKind::Wilaya => "wilaya",
            RefKind::Commune => "commune",
            RefKind::PropertyType => "property type",
        }
    }

    /// Plural display name for tabs and list headers
    pub fn title(&self) -> &'static str {
        match self {
            RefKind::Wilaya => "Wilayas",
            RefKind::Commune => "Communes",
            RefKind::PropertyType => "Property types",
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// A persisted reference record. `id` is assigned by the Record Store on
/// creation; `code` is the administrator-supplied identity key, unique within
/// its kind and immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefRecord {
    pub id: i64,
    pub code: String,
    pub name: String,
    /// Alternate-script display name
    pub arabic_name: String,
}

/// A not-yet-persisted candidate record. Only the Record Store hands out
/// ids, so a draft has no `id` field at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecordDraft {
    pub code: String,
    pub name: String,
    pub arabic_name: String,
}

/// Updatable fields of a record. The `code` identity key is never part of an
/// update payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordFields {
    pub name: String,
    pub arabic_name: String,
}

impl RecordDraft {
    /// Project the draft onto an update payload, dropping the code key.
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            arabic_name: self.arabic_name.clone(),
        }
    }
}

impl RefRecord {
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            arabic_name: self.arabic_name.clone(),
        }
    }
}
