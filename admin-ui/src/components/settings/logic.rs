//! Settings panel pure logic — no RSX, no signals

use shared_types::{RefKind, RefRecord};

/// Conflict detector: the record owning `code`, if any. Exact, case-sensitive
/// equality over the cached list; order of the list does not matter.
pub fn find_by_code<'a>(records: &'a [RefRecord], code: &str) -> Option<&'a RefRecord> {
    records.iter().find(|r| r.code == code)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Body of the conflict confirmation dialog. Must name both the candidate's
/// code and the existing record.
pub fn conflict_message(kind: RefKind, code: &str, existing_name: &str) -> String {
    format!(
        "A {} with code \"{}\" already exists ({}). Do you really want to update it?",
        kind.label(),
        code,
        existing_name
    )
}

/// Body of the delete confirmation dialog
pub fn delete_message(kind: RefKind, label: &str) -> String {
    format!(
        "Delete {} \"{}\"? This cannot be undone.",
        kind.label(),
        label
    )
}

pub fn created_message(kind: RefKind) -> String {
    format!("{} created successfully", capitalize(kind.label()))
}

pub fn updated_message(kind: RefKind) -> String {
    format!("{} updated successfully", capitalize(kind.label()))
}

pub fn deleted_message(kind: RefKind) -> String {
    format!("{} deleted successfully", capitalize(kind.label()))
}

pub fn load_error_message(kind: RefKind, error: &str) -> String {
    format!("Failed to load {}: {}", kind.title().to_lowercase(), error)
}
