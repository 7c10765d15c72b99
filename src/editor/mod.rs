//! Editor session state.
//!
//! [`EditorSession`] is the single owner of everything the editor displays:
//! the drafts being edited, and the top-level error or the last result of a
//! submission. Submission services and renderers receive it explicitly.

mod session;

pub use session::{EditorSession, SubmissionState};

#[cfg(test)]
mod tests;
