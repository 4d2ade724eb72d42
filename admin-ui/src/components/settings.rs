//! Reference-data settings panel
//!
//! Administrative CRUD over wilayas, communes, and property types, with a
//! conflict-aware create flow: creating a record whose code already exists
//! pauses the write behind a confirmation modal and resumes as an
//! update-in-place of the existing record, or a cancellation.

pub mod controller;
pub mod logic;
pub mod modal;
pub mod state;
pub mod styles;
pub mod types;
pub mod view;

pub use view::SettingsPage;
