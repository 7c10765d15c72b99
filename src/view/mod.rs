//! Presentation of editor sessions and submission results.
//!
//! [`model`] reshapes domain documents into flat, display-ready rows and
//! [`render`] turns those rows into text with `minijinja` templates.

pub mod model;
pub mod render;

pub use model::{
    DraftRow, FieldRow, InvalidRow, ListingView, PrioritizedRow, ResultView, SessionView,
    ValidationView, category_class,
};
pub use render::{RenderError, Renderer};

#[cfg(test)]
mod tests;
