//! Domain model for task drafts.
//!
//! Drafts are identified by a [`DraftId`] allocated at creation time and never
//! derived from their position in the [`DraftCollection`]. All four editable
//! fields stay raw strings until [`to_payload`] normalizes them.

mod collection;
mod draft;
mod error;
mod field;
mod ids;
mod payload;

pub use collection::DraftCollection;
pub use draft::Draft;
pub use error::ParseDraftFieldError;
pub use field::{DraftField, InputKind};
pub use ids::DraftId;
pub use payload::{NormalizedPayload, to_payload};
