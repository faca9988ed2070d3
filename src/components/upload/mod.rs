//! Novel upload form.
//!
//! - [`UploadPage`] - Page composing the fields and the submit flow
//! - `TextField` - Text input with presence feedback
//! - `FileField` - File picker with presence feedback
//! - `UploadForm` - Signal wrapper around the form state

mod file_field;
mod hooks;
mod page;
mod text_field;

pub use page::UploadPage;
