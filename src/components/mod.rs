//! UI components built with Leptos.
//!
//! - [`icons`] - Centralized icon definitions
//! - [`upload`] - Upload page and its field renderers

pub mod icons;
pub mod upload;

pub use upload::UploadPage;
