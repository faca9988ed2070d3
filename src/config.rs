//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the page header.
pub const APP_NAME: &str = "Storymaker";

/// Short description, mirrored in the `<meta name="description">` tag of `index.html`.
pub const APP_DESCRIPTION: &str = "CMS to upload a novel to a blog";

/// Heading shown above the upload form.
pub const FORM_HEADING: &str = "Upload your novel";

// =============================================================================
// Network Configuration
// =============================================================================

/// Endpoint receiving the multipart upload.
pub const UPLOAD_ENDPOINT: &str = "https://path/to/api";

/// Upload request timeout in milliseconds.
pub const UPLOAD_TIMEOUT_MS: i32 = 30_000;

// =============================================================================
// Form Configuration
// =============================================================================

/// Input placeholders.
pub mod placeholders {
    pub const TITLE: &str = "blood and flowers";
    pub const CATEGORY: &str = "cyberpunk";
    pub const FILE: &str = "choose a novel";
}

/// Label of the submit button.
pub const SUBMIT_LABEL: &str = "submit";
