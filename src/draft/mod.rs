//! Draft editing for the task prioritization client.
//!
//! A draft is a task the user is still filling in. Drafts keep every field as
//! the raw string the user typed; conversion into a typed request happens only
//! when the batch is submitted. The module follows the same layering as the
//! rest of the crate:
//!
//! - Domain types, the collection controller and the payload normalizer in
//!   [`domain`]

pub mod domain;

#[cfg(test)]
mod tests;
