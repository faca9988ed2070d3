//! Core logic for the upload page.
//!
//! This module provides:
//! - [`BrowserUploader`] and [`send_submission`] for the multipart request
//! - [`validate_endpoint`] for the mount-time endpoint check
//! - [`error::UploadError`] for transport failures

pub mod error;
mod upload;

pub use upload::{BrowserUploader, send_submission, validate_endpoint};
