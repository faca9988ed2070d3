//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FieldName`] - Form fields, their messages and presence validation
//! - [`FormState`], [`SubmitPhase`] - Upload form state machine
//! - [`Submission`], [`FormPart`] - Validated values and their multipart layout

mod field;
mod form;

pub use field::FieldName;
pub use form::{Attachment, FormPart, FormState, Submission, SubmitBlocked, SubmitPhase};
