//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`build_request`] - Multipart POST request construction
//! - [`fetch_json`] - Fetch with timeout and JSON response parsing
//! - [`dom`] - Browser API accessors

pub mod dom;
mod fetch;

pub use fetch::{build_request, fetch_json};
