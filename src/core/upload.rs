//! Sending a [`Submission`] to the upload endpoint.
//!
//! [`Uploader`] is the seam between the submit flow and the network:
//! [`BrowserUploader`] encodes the parts as `FormData` and POSTs them with the
//! Fetch API, tests substitute a recording fake.

use serde_json::Value;
use web_sys::{FormData, Request};

use crate::config::{UPLOAD_ENDPOINT, UPLOAD_TIMEOUT_MS};
use crate::core::error::UploadError;
use crate::models::{Attachment, FormPart, Submission};
use crate::utils::{build_request, fetch_json};

impl Attachment for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// Transport for a single submission.
#[allow(async_fn_in_trait)]
pub trait Uploader {
    type File: Attachment;

    /// Sends one request and returns the parsed response body.
    async fn upload(&self, submission: &Submission<Self::File>) -> Result<Value, UploadError>;
}

/// Uploads through the browser's Fetch API.
#[derive(Clone, Copy, Debug)]
pub struct BrowserUploader {
    endpoint: &'static str,
    timeout_ms: i32,
}

impl BrowserUploader {
    pub fn new(endpoint: &'static str, timeout_ms: i32) -> Self {
        Self {
            endpoint,
            timeout_ms,
        }
    }

    /// The exact request [`Uploader::upload`] sends for `submission`.
    pub fn request(&self, submission: &Submission<web_sys::File>) -> Result<Request, UploadError> {
        let body = build_form_data(submission)?;
        build_request(self.endpoint, &body)
    }
}

impl Default for BrowserUploader {
    fn default() -> Self {
        Self::new(UPLOAD_ENDPOINT, UPLOAD_TIMEOUT_MS)
    }
}

impl Uploader for BrowserUploader {
    type File = web_sys::File;

    async fn upload(&self, submission: &Submission<web_sys::File>) -> Result<Value, UploadError> {
        let request = self.request(submission)?;
        fetch_json(&request, self.timeout_ms).await
    }
}

/// Encodes the submission parts into a `FormData` body.
pub fn build_form_data(submission: &Submission<web_sys::File>) -> Result<FormData, UploadError> {
    let form_data = FormData::new().map_err(|_| UploadError::FormDataFailed("form"))?;

    for part in submission.parts() {
        let appended = match &part {
            FormPart::File {
                name,
                file_name,
                attachment,
            } => form_data.append_with_blob_and_filename(name, attachment, file_name),
            FormPart::Text { name, value } => form_data.append_with_str(name, value),
        };
        appended.map_err(|_| UploadError::FormDataFailed(part.name()))?;
    }

    Ok(form_data)
}

/// Checks that `endpoint` parses as an absolute URL.
///
/// Run once when the page mounts so a misconfigured endpoint surfaces in the
/// error boundary instead of on every submit.
pub fn validate_endpoint(endpoint: &str) -> Result<(), UploadError> {
    web_sys::Url::new(endpoint)
        .map(|_| ())
        .map_err(|_| UploadError::InvalidEndpoint(endpoint.to_string()))
}

/// Sends `submission` once and logs the outcome.
///
/// The response body is parsed by the uploader and dropped here. The
/// submission itself is consumed and discarded when the request settles.
pub async fn send_submission<U: Uploader>(
    uploader: &U,
    submission: Submission<U::File>,
) -> Result<(), UploadError> {
    log::info!(
        "uploading '{}' ({}) as '{}'",
        submission.title,
        submission.category,
        submission.file.file_name()
    );

    match uploader.upload(&submission).await {
        Ok(response) => {
            log::debug!("upload accepted: {response}");
            Ok(())
        }
        Err(e) => {
            log::error!("upload failed: {e}");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::json;

    use super::*;
    use crate::models::{FieldName, FormState, SubmitBlocked, SubmitPhase};

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile(&'static str);

    impl Attachment for FakeFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    /// What the fake saw for one request: `(part name, filename)` pairs.
    type RecordedRequest = Vec<(&'static str, Option<String>)>;

    struct RecordingUploader {
        requests: RefCell<Vec<RecordedRequest>>,
        response: Result<Value, UploadError>,
    }

    impl RecordingUploader {
        fn responding(response: Result<Value, UploadError>) -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                response,
            }
        }

        fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl Uploader for RecordingUploader {
        type File = FakeFile;

        async fn upload(&self, submission: &Submission<FakeFile>) -> Result<Value, UploadError> {
            let parts = submission
                .parts()
                .iter()
                .map(|part| match part {
                    FormPart::File {
                        name, file_name, ..
                    } => (*name, Some(file_name.clone())),
                    FormPart::Text { name, .. } => (*name, None),
                })
                .collect();
            self.requests.borrow_mut().push(parts);
            self.response.clone()
        }
    }

    /// Drives the page's submit handler against `uploader`.
    async fn submit(
        form: &mut FormState<FakeFile>,
        uploader: &RecordingUploader,
    ) -> Result<(), SubmitBlocked> {
        let submission = form.begin_submit()?;
        let outcome = send_submission(uploader, submission).await;
        form.finish_submit(outcome);
        Ok(())
    }

    fn fill(form: &mut FormState<FakeFile>) {
        form.set_title("blood and flowers");
        form.set_category("cyberpunk");
        form.set_file(Some(FakeFile("blood-and-flowers.epub")));
    }

    #[tokio::test]
    async fn test_valid_submit_posts_once() {
        let uploader = RecordingUploader::responding(Ok(json!({ "id": 7 })));
        let mut form = FormState::new();
        fill(&mut form);

        submit(&mut form, &uploader).await.unwrap();

        let requests = uploader.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0],
            vec![
                ("file", Some("blood-and-flowers.epub".to_string())),
                ("title", None),
                ("category", None),
            ]
        );
        assert_eq!(form.phase(), SubmitPhase::Editing);
        assert_eq!(form.last_failure(), None);
    }

    #[tokio::test]
    async fn test_invalid_submit_sends_nothing() {
        let uploader = RecordingUploader::responding(Ok(Value::Null));
        let mut form = FormState::new();
        form.set_title("blood and flowers");

        let blocked = submit(&mut form, &uploader).await.unwrap_err();

        assert!(matches!(blocked, SubmitBlocked::Invalid(_)));
        assert_eq!(uploader.request_count(), 0);
        assert_eq!(
            form.errors().fields().collect::<Vec<_>>(),
            vec![FieldName::Category, FieldName::File]
        );
    }

    #[tokio::test]
    async fn test_network_failure_returns_to_editing() {
        let uploader =
            RecordingUploader::responding(Err(UploadError::NetworkError("Failed to fetch".into())));
        let mut form = FormState::new();
        fill(&mut form);

        submit(&mut form, &uploader).await.unwrap();

        assert_eq!(uploader.request_count(), 1);
        assert_eq!(form.phase(), SubmitPhase::Editing);
        assert_eq!(form.last_failure(), Some("Network error: Failed to fetch"));
        assert_eq!(form.title(), "blood and flowers");
        assert_eq!(form.category(), "cyberpunk");
        assert_eq!(form.file(), Some(&FakeFile("blood-and-flowers.epub")));
        assert!(!form.is_submit_disabled());
    }

    #[tokio::test]
    async fn test_empty_then_filled_end_to_end() {
        let uploader = RecordingUploader::responding(Ok(json!({})));
        let mut form = FormState::new();

        assert!(submit(&mut form, &uploader).await.is_err());
        assert_eq!(form.errors().len(), 3);
        assert!(form.is_submit_disabled());
        assert_eq!(uploader.request_count(), 0);

        fill(&mut form);
        assert!(!form.is_submit_disabled());
        submit(&mut form, &uploader).await.unwrap();

        assert_eq!(uploader.request_count(), 1);
        assert_eq!(form.phase(), SubmitPhase::Editing);
        assert_eq!(form.title(), "blood and flowers");
        assert!(form.file().is_some());
    }
}
